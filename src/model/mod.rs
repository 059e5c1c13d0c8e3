//! Data model shared by the extractor and the heading detector.
//!
//! [`TextSpan`] is the contract between span extraction and detection;
//! the outline types describe what detection produces.

mod outline;
mod span;

pub use outline::{
    Heading, HeadingLevel, Outline, OutlineEntry, OutlineMetadata, Title, NO_TEXT_CONTENT,
};
pub use span::{font_name_is_bold, font_name_is_italic, round2, Position, TextSpan};
