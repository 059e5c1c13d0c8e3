//! Single-document outline extraction.

use std::path::Path;

use crate::detect;
use crate::detector::{DetectorConfig, HeadingDetector};
use crate::error::Result;
use crate::model::{Outline, OutlineMetadata, TextSpan};
use crate::parser::{DocumentInfo, LopdfBackend, ParseOptions, PdfBackend, SpanExtractor};

/// Prefix of the error text recorded for documents that could not be processed.
pub const FAILURE_PREFIX: &str = "Failed to process PDF";

/// Builder and entry point for turning PDF files into outlines.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::{DetectorConfig, OutlineExtractor};
///
/// let outline = OutlineExtractor::new()
///     .with_detector_config(DetectorConfig::new().with_min_font_size_diff(1.5))
///     .extract("report.pdf");
///
/// println!("{}: {} heading(s)", outline.title, outline.heading_count());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutlineExtractor {
    detector: HeadingDetector,
    parse_options: ParseOptions,
}

impl OutlineExtractor {
    /// Create an extractor with default detector and parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the detector configuration.
    pub fn with_detector_config(mut self, config: DetectorConfig) -> Self {
        self.detector = HeadingDetector::with_config(config);
        self
    }

    /// Set span extraction options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Fail the whole document when any page cannot be decoded.
    pub fn strict(mut self) -> Self {
        self.parse_options = self.parse_options.strict();
        self
    }

    /// The heading detector in use.
    pub fn detector(&self) -> &HeadingDetector {
        &self.detector
    }

    /// The span extraction options in use.
    pub fn parse_options(&self) -> &ParseOptions {
        &self.parse_options
    }

    /// Extract the outline of a PDF file.
    ///
    /// Never fails: a document that cannot be loaded or read produces an
    /// outline with an empty title, no headings and an `error` message.
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> Outline {
        let path = path.as_ref();
        match self.try_extract(path) {
            Ok(outline) => {
                log::info!(
                    "{}: title {:?}, {} heading(s)",
                    path.display(),
                    outline.title,
                    outline.heading_count()
                );
                outline
            }
            Err(e) => {
                log::warn!("{}: {}", path.display(), e);
                Outline::failed(source_name(path), format!("{}: {}", FAILURE_PREFIX, e))
            }
        }
    }

    /// Extract the outline of a PDF file, returning load errors to the caller.
    ///
    /// A document that loads but carries no text is not an error; its outline
    /// records the missing text in `error`.
    pub fn try_extract<P: AsRef<Path>>(&self, path: P) -> Result<Outline> {
        let path = path.as_ref();
        let backend = self.load(path)?;
        self.outline_from_backend(&backend, source_name(path))
    }

    /// Extract the outline of an in-memory PDF.
    pub fn try_extract_bytes(&self, data: &[u8], source_file: &str) -> Result<Outline> {
        if self.parse_options.verify_header {
            detect::sniff_bytes(data)?;
        }
        let backend = LopdfBackend::load_bytes(data)?;
        self.outline_from_backend(&backend, source_file.to_string())
    }

    /// Extract the styled text spans of a PDF file in content-stream order.
    pub fn extract_spans<P: AsRef<Path>>(&self, path: P) -> Result<Vec<TextSpan>> {
        let backend = self.load(path.as_ref())?;
        SpanExtractor::with_options(&backend, self.parse_options.clone()).extract_document()
    }

    /// Read the document information of a PDF file.
    pub fn document_info<P: AsRef<Path>>(&self, path: P) -> Result<DocumentInfo> {
        Ok(self.load(path.as_ref())?.document_info())
    }

    /// Run the detector over spans that were extracted elsewhere.
    pub fn outline_from_spans(&self, spans: &[TextSpan], metadata: OutlineMetadata) -> Outline {
        if spans.is_empty() {
            return Outline::empty_content(metadata);
        }
        self.detector.outline(spans, metadata)
    }

    fn load(&self, path: &Path) -> Result<LopdfBackend> {
        if self.parse_options.verify_header {
            let version = detect::sniff_file(path)?;
            log::debug!("{}: PDF {}", path.display(), version);
        }
        LopdfBackend::load_file(path)
    }

    fn outline_from_backend<B: PdfBackend>(&self, backend: &B, source_file: String) -> Result<Outline> {
        let page_count = backend.pages().len() as u32;
        let spans = SpanExtractor::with_options(backend, self.parse_options.clone())
            .extract_document()?;
        log::debug!("{}: {} span(s) on {} page(s)", source_file, spans.len(), page_count);

        Ok(self.outline_from_spans(&spans, OutlineMetadata::new(source_file, page_count)))
    }
}

/// File name of the source document, without its directory.
pub(crate) fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
