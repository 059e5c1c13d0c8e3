//! Error types for pdfoutline library.
//!
//! Only span extraction and the directory batch surface these to callers;
//! [`OutlineExtractor::extract`](crate::OutlineExtractor::extract) folds any
//! of them into the `error` field of the returned outline.

use std::io;
use thiserror::Error;

/// Result type alias for pdfoutline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a document produced no outline, or why an outline could not be written.
#[derive(Error, Debug)]
pub enum Error {
    /// Input PDF unreadable or output JSON not writable.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No `%PDF-` header near the start of the file.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// `%PDF-` is followed by something other than `d.d`.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// lopdf rejected the document structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// Text of an encrypted document cannot be read without the password.
    #[error("Document is encrypted")]
    Encrypted,

    /// Broken cross-references, offsets or page content streams.
    #[error("Corrupted PDF structure: {0}")]
    Corrupted(String),

    /// A page content stream that does not decode into operations.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Requested page number, and the document's page count.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Outline JSON could not be produced or read back.
    #[error("Rendering error: {0}")]
    Render(String),

    /// A heading level other than H1, H2 or H3.
    #[error("Unknown heading level: {0}")]
    UnknownLevel(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            lopdf::Error::MissingXrefEntry
            | lopdf::Error::InvalidOffset(_)
            | lopdf::Error::ReferenceCycle(_)
            | lopdf::Error::InvalidObjectStream(_) => Error::Corrupted(err.to_string()),
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
