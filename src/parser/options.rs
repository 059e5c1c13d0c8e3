//! Span extraction options.

/// Options for extracting text spans from PDF documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode for page-level failures
    pub error_mode: ErrorMode,

    /// Apply Unicode NFC normalization to span text
    pub normalize_text: bool,

    /// Check the `%PDF-` header before handing the file to the PDF library
    pub verify_header: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Fail the whole document when any page cannot be decoded.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Skip pages that cannot be decoded.
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable or disable Unicode normalization of span text.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize_text = normalize;
        self
    }

    /// Enable or disable the header check.
    pub fn with_header_check(mut self, verify: bool) -> Self {
        self.verify_header = verify;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            normalize_text: true,
            verify_header: true,
        }
    }
}

/// Error handling mode during span extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any page error
    Strict,
    /// Log and skip pages whose content cannot be read
    #[default]
    Lenient,
}
