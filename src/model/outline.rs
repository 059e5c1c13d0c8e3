//! Outline types: detected title, headings and the serialized result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::span::{Position, TextSpan};
use crate::error::Error;

/// Error text recorded when a document parses but yields no spans.
pub const NO_TEXT_CONTENT: &str = "No text content found in PDF";

/// Heading rank, largest font first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// All levels in rank order.
    pub const ALL: [HeadingLevel; 3] = [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3];

    /// Label used in the JSON output ("H1", "H2", "H3").
    pub fn as_str(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        }
    }

    /// Nesting depth, 1 for H1.
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeadingLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "H1" => Ok(HeadingLevel::H1),
            "H2" => Ok(HeadingLevel::H2),
            "H3" => Ok(HeadingLevel::H3),
            other => Err(Error::UnknownLevel(other.to_string())),
        }
    }
}

/// The document title picked from page 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    pub font_size: f32,
    pub page_number: u32,
    pub position: Position,
    pub is_bold: bool,
    pub is_italic: bool,
}

impl From<&TextSpan> for Title {
    fn from(span: &TextSpan) -> Self {
        Self {
            text: span.text.clone(),
            font_size: span.font_size,
            page_number: span.page_number,
            position: span.position(),
            is_bold: span.is_bold,
            is_italic: span.is_italic,
        }
    }
}

/// A span classified as a heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    pub level: HeadingLevel,
    pub page_number: u32,
    pub font_size: f32,
    pub position: Position,
    pub is_bold: bool,
    pub is_italic: bool,
}

impl Heading {
    /// Create a heading record from the span it was detected on.
    pub fn from_span(span: &TextSpan, level: HeadingLevel) -> Self {
        Self {
            text: span.text.clone(),
            level,
            page_number: span.page_number,
            font_size: span.font_size,
            position: span.position(),
            is_bold: span.is_bold,
            is_italic: span.is_italic,
        }
    }
}

/// One line of the final outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    pub text: String,
    pub level: HeadingLevel,
    pub page: u32,
}

impl From<&Heading> for OutlineEntry {
    fn from(heading: &Heading) -> Self {
        Self {
            text: heading.text.clone(),
            level: heading.level,
            page: heading.page_number,
        }
    }
}

/// Source information attached to every outline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineMetadata {
    /// Number of pages, absent when the document could not be loaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,

    /// File name of the source document (no directory part)
    #[serde(default)]
    pub source_file: String,
}

impl OutlineMetadata {
    /// Metadata for a loaded document.
    pub fn new(source_file: impl Into<String>, page_count: u32) -> Self {
        Self {
            page_count: Some(page_count),
            source_file: source_file.into(),
        }
    }

    /// Metadata for a document that never loaded.
    pub fn source_only(source_file: impl Into<String>) -> Self {
        Self {
            page_count: None,
            source_file: source_file.into(),
        }
    }
}

/// The extracted outline of one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Title text, empty when no title was detected
    pub title: String,

    /// Headings in reading order
    pub headings: Vec<OutlineEntry>,

    /// Source information
    #[serde(default)]
    pub metadata: OutlineMetadata,

    /// Failure description, present only when extraction failed or found no text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Outline {
    /// Outline for a document that could not be processed.
    pub fn failed(source_file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            headings: Vec::new(),
            metadata: OutlineMetadata::source_only(source_file),
            error: Some(message.into()),
        }
    }

    /// Outline for a document that loaded but carries no text.
    pub fn empty_content(metadata: OutlineMetadata) -> Self {
        Self {
            title: String::new(),
            headings: Vec::new(),
            metadata,
            error: Some(NO_TEXT_CONTENT.to_string()),
        }
    }

    /// Attach source metadata.
    pub fn with_metadata(mut self, metadata: OutlineMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Whether an error was recorded.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Number of headings.
    pub fn heading_count(&self) -> usize {
        self.headings.len()
    }

    /// Headings of a single level, in order.
    pub fn headings_at(&self, level: HeadingLevel) -> impl Iterator<Item = &OutlineEntry> {
        self.headings.iter().filter(move |h| h.level == level)
    }
}
