//! Styled text spans, the input every detector stage consumes.

use serde::{Deserialize, Serialize};

/// Font name fragments that mark a bold face.
const BOLD_MARKERS: &[&str] = &["bold", "black", "heavy"];

/// Font name fragments that mark an italic face.
const ITALIC_MARKERS: &[&str] = &["italic", "oblique"];

/// Top-left corner of a span in page space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// A run of text sharing one font, size and style on a single page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content, trimmed and never empty
    pub text: String,
    /// Font size in points, rounded to 2 decimals
    pub font_size: f32,
    /// 1-indexed page number
    pub page_number: u32,
    /// Left edge
    pub x: f32,
    /// Top edge, measured from the top of the page
    pub y: f32,
    /// Width of the text
    pub width: f32,
    /// Height of the text box
    pub height: f32,
    /// Whether the font appears to be bold
    pub is_bold: bool,
    /// Whether the font appears to be italic
    pub is_italic: bool,
    /// Base font name (e.g., "Helvetica-Bold"), empty when unknown
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub font_name: String,
}

impl TextSpan {
    /// Create a span with a zero-sized box at the origin of page 1.
    ///
    /// The text is trimmed and the font size rounded to 2 decimals.
    /// Use the `at`, `sized`, `on_page`, `bold`, `italic` builders to place it.
    pub fn new(text: impl Into<String>, font_size: f32) -> Self {
        Self {
            text: text.into().trim().to_string(),
            font_size: round2(font_size),
            page_number: 1,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            is_bold: false,
            is_italic: false,
            font_name: String::new(),
        }
    }

    /// Set the page number.
    pub fn on_page(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }

    /// Set the top-left corner.
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the box size.
    pub fn sized(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Mark the span bold.
    pub fn bold(mut self, is_bold: bool) -> Self {
        self.is_bold = is_bold;
        self
    }

    /// Mark the span italic.
    pub fn italic(mut self, is_italic: bool) -> Self {
        self.is_italic = is_italic;
        self
    }

    /// Record the font name and derive bold/italic from it.
    ///
    /// Name markers only ever turn styles on; flags set earlier are kept.
    pub fn with_font_name(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = font_name.into();
        self.is_bold |= font_name_is_bold(&self.font_name);
        self.is_italic |= font_name_is_italic(&self.font_name);
        self
    }

    /// Top-left corner of the span.
    pub fn position(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }

    /// Bottom edge of the span box.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Check a font name for a bold marker ("bold", "black", "heavy").
pub fn font_name_is_bold(font_name: &str) -> bool {
    let lower = font_name.to_lowercase();
    BOLD_MARKERS.iter().any(|m| lower.contains(m))
}

/// Check a font name for an italic marker ("italic", "oblique").
pub fn font_name_is_italic(font_name: &str) -> bool {
    let lower = font_name.to_lowercase();
    ITALIC_MARKERS.iter().any(|m| lower.contains(m))
}

/// Round to 2 decimal places.
pub fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
