//! Heading detection over extracted text spans.
//!
//! The detector works on a flat list of [`TextSpan`]s and never looks at the
//! PDF itself. Stages, in order:
//!
//! 1. [`FontHierarchy::build`] maps up to three font sizes to H1-H3.
//! 2. [`detect_title`] picks the title from page 1.
//! 3. [`classify`] decides, span by span in reading order, what is a heading.
//! 4. [`build_outline`] assembles the result.
//!
//! # Example
//!
//! ```
//! use pdfoutline::detector::HeadingDetector;
//! use pdfoutline::model::TextSpan;
//!
//! let spans = vec![
//!     TextSpan::new("Annual Report", 24.0).at(72.0, 60.0).bold(true),
//!     TextSpan::new("Summary", 16.0).at(72.0, 120.0).sized(80.0, 16.0).bold(true),
//!     TextSpan::new("numbers went up this year", 11.0).at(72.0, 140.0).sized(200.0, 11.0),
//! ];
//!
//! let analysis = HeadingDetector::new().analyze(&spans);
//! assert_eq!(analysis.title.unwrap().text, "Annual Report");
//! assert_eq!(analysis.headings.len(), 2);
//! ```

mod classifier;
mod hierarchy;
mod outline;
mod title;

pub use classifier::{
    classify, evaluate, has_whitespace_above, is_all_caps, is_title_case, match_level,
    required_indicators, Signals, Verdict, FONT_SIZE_TOLERANCE, LINE_SPACING_FACTOR,
    MAX_HEADING_CHARS, MAX_HEADING_Y, MIN_INDICATORS, MIN_INDICATORS_H3, NON_BOLD_PENALTY,
    TITLE_CASE_RATIO, WHITESPACE_GAP_FACTOR,
};
pub use hierarchy::{FontHierarchy, DEFAULT_MIN_FONT_SIZE_DIFF};
pub use outline::build_outline;
pub use title::{detect_title, TITLE_PAGE};

use crate::model::{Heading, Outline, OutlineMetadata, TextSpan, Title};

/// Detector configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    /// Minimum font size difference between two heading levels
    pub min_font_size_diff: f32,

    /// Whether the last span of a page is the "previous span" of the first
    /// span on the next page (whitespace-above indicator)
    pub carry_across_pages: bool,
}

impl DetectorConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum font size difference between levels.
    pub fn with_min_font_size_diff(mut self, diff: f32) -> Self {
        self.min_font_size_diff = diff;
        self
    }

    /// Enable or disable carrying the previous span across page boundaries.
    pub fn with_carry_across_pages(mut self, carry: bool) -> Self {
        self.carry_across_pages = carry;
        self
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_font_size_diff: DEFAULT_MIN_FONT_SIZE_DIFF,
            carry_across_pages: true,
        }
    }
}

/// Everything the detector derives from one document's spans.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub hierarchy: FontHierarchy,
    pub title: Option<Title>,
    pub headings: Vec<Heading>,
}

impl Analysis {
    /// Assemble the outline and attach source metadata.
    pub fn into_outline(self, metadata: OutlineMetadata) -> Outline {
        build_outline(&self.headings, self.title.as_ref()).with_metadata(metadata)
    }
}

/// Document-level heading detector.
#[derive(Debug, Clone, Default)]
pub struct HeadingDetector {
    config: DetectorConfig,
}

impl HeadingDetector {
    /// Create a detector with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with a custom configuration.
    pub fn with_config(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Build the font hierarchy for a document.
    pub fn font_hierarchy(&self, spans: &[TextSpan]) -> FontHierarchy {
        FontHierarchy::build(spans, self.config.min_font_size_diff)
    }

    /// Detect the title, see [`detect_title`].
    pub fn detect_title(&self, spans: &[TextSpan]) -> Option<Title> {
        detect_title(spans)
    }

    /// Detect all headings of a document in reading order.
    pub fn detect_headings(&self, spans: &[TextSpan]) -> Vec<Heading> {
        let hierarchy = self.font_hierarchy(spans);
        self.headings_with(spans, &hierarchy)
    }

    /// Run every stage once.
    pub fn analyze(&self, spans: &[TextSpan]) -> Analysis {
        let hierarchy = self.font_hierarchy(spans);
        let headings = self.headings_with(spans, &hierarchy);
        let title = detect_title(spans);

        log::debug!(
            "Hierarchy {:?}, title {:?}, {} heading(s) from {} span(s)",
            hierarchy.iter().collect::<Vec<_>>(),
            title.as_ref().map(|t| t.text.as_str()),
            headings.len(),
            spans.len()
        );

        Analysis {
            hierarchy,
            title,
            headings,
        }
    }

    /// Produce the finished outline for a document's spans.
    pub fn outline(&self, spans: &[TextSpan], metadata: OutlineMetadata) -> Outline {
        self.analyze(spans).into_outline(metadata)
    }

    /// Pair every span, in reading order, with its classifier verdict.
    pub fn explain<'a>(&self, spans: &'a [TextSpan]) -> Vec<(&'a TextSpan, Verdict)> {
        let hierarchy = self.font_hierarchy(spans);
        self.fold_reading_order(spans, Vec::new(), |mut acc, span, prev| {
            acc.push((span, evaluate(span, &hierarchy, prev)));
            acc
        })
    }

    fn headings_with(&self, spans: &[TextSpan], hierarchy: &FontHierarchy) -> Vec<Heading> {
        if hierarchy.is_empty() {
            return Vec::new();
        }

        self.fold_reading_order(spans, Vec::new(), |mut acc, span, prev| {
            if let Some(level) = classify(span, hierarchy, prev) {
                acc.push(Heading::from_span(span, level));
            }
            acc
        })
    }

    /// Fold over spans sorted by (page, y), handing each span its predecessor.
    ///
    /// The sort is stable, so spans on the same line keep extraction order.
    fn fold_reading_order<'a, B>(
        &self,
        spans: &'a [TextSpan],
        init: B,
        mut f: impl FnMut(B, &'a TextSpan, Option<&'a TextSpan>) -> B,
    ) -> B {
        let mut ordered: Vec<&TextSpan> = spans.iter().collect();
        ordered.sort_by(|a, b| {
            a.page_number
                .cmp(&b.page_number)
                .then_with(|| a.y.total_cmp(&b.y))
        });

        let carry = self.config.carry_across_pages;
        let (acc, _) = ordered
            .into_iter()
            .fold((init, None::<&TextSpan>), |(acc, prev), span| {
                let prev = prev.filter(|p| carry || p.page_number == span.page_number);
                (f(acc, span, prev), Some(span))
            });
        acc
    }
}
