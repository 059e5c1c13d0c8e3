//! PDF loading and text span extraction.
//!
//! [`LopdfBackend`] wraps the PDF library; [`SpanExtractor`] walks page
//! content streams through the [`PdfBackend`] trait and produces
//! [`TextSpan`](crate::model::TextSpan)s for the detector.

mod backend;
mod extractor;
mod info;
mod options;

pub use backend::{
    decode_text_simple, BackendFontInfo, ContentOp, LopdfBackend, PageBox, PageId, PdfBackend,
    PdfValue, DEFAULT_PAGE_BOX, FLAG_FORCE_BOLD, FLAG_ITALIC,
};
pub use extractor::SpanExtractor;
pub use info::DocumentInfo;
pub use options::{ErrorMode, ParseOptions};
