//! # pdfoutline
//!
//! Heading outline extraction for PDF documents.
//!
//! This library reads the styled text of a PDF and recovers its title and a
//! three-level heading outline (H1-H3) from visual cues: font size, bold
//! and capitalized text, whitespace above a line and its position on the
//! page. PDF bookmarks are not used.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfoutline::{extract_outline, render, JsonFormat};
//!
//! fn main() -> pdfoutline::Result<()> {
//!     let outline = extract_outline("document.pdf");
//!     println!("{}", render::to_json(&outline, JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//!
//! - [`parser`]: loads the PDF and turns page content into [`TextSpan`]s
//! - [`detector`]: font hierarchy, title and heading classification
//! - [`render`]: JSON output
//! - [`batch`]: directory processing, optionally in parallel with Rayon

pub mod batch;
pub mod detect;
pub mod detector;
pub mod error;
mod extract;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use batch::{find_pdf_files, process_directory, BatchEntry, BatchOptions, BatchReport};
pub use detect::{has_pdf_extension, sniff_bytes, sniff_file};
pub use detector::{Analysis, DetectorConfig, FontHierarchy, HeadingDetector};
pub use error::{Error, Result};
pub use extract::{OutlineExtractor, FAILURE_PREFIX};
pub use model::{
    Heading, HeadingLevel, Outline, OutlineEntry, OutlineMetadata, Position, TextSpan, Title,
};
pub use parser::{DocumentInfo, ErrorMode, ParseOptions};
pub use render::JsonFormat;

use std::path::Path;

/// Extract the outline of a PDF file with default settings.
///
/// Failures are reported inside the returned outline, see
/// [`OutlineExtractor::extract`].
///
/// # Example
///
/// ```no_run
/// use pdfoutline::extract_outline;
///
/// let outline = extract_outline("document.pdf");
/// for heading in &outline.headings {
///     println!("{} {} (p. {})", heading.level, heading.text, heading.page);
/// }
/// ```
pub fn extract_outline<P: AsRef<Path>>(path: P) -> Outline {
    OutlineExtractor::new().extract(path)
}

/// Extract the styled text spans of a PDF file.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::extract_spans;
///
/// let spans = extract_spans("document.pdf").unwrap();
/// println!("Spans: {}", spans.len());
/// ```
pub fn extract_spans<P: AsRef<Path>>(path: P) -> Result<Vec<TextSpan>> {
    OutlineExtractor::new().extract_spans(path)
}

/// Read the document information of a PDF file.
pub fn document_info<P: AsRef<Path>>(path: P) -> Result<DocumentInfo> {
    OutlineExtractor::new().document_info(path)
}

/// Convert a PDF file to outline JSON.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::{to_json, JsonFormat};
///
/// let json = to_json("document.pdf", JsonFormat::Pretty).unwrap();
/// std::fs::write("document.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    render::to_json(&extract_outline(path), format)
}
