//! Heading classification for a single span.
//!
//! A span is a heading candidate when its font size matches a level of the
//! document's [`FontHierarchy`]. Candidates are then confirmed by counting
//! five visual indicators (title case, all caps, whitespace above, position
//! on the page, bold) against a per-level threshold.
//!
//! The constants below are the calibration the heuristic was tuned against.
//! They are fixed policy rather than configuration.

use std::sync::LazyLock;

use regex::Regex;

use super::hierarchy::FontHierarchy;
use crate::model::{HeadingLevel, TextSpan};

/// A span matches a level when its size is strictly closer than this.
///
/// Smaller than the default minimum level gap, so at most one level matches.
pub const FONT_SIZE_TOLERANCE: f32 = 0.1;

/// Text longer than this (in characters) is body text.
pub const MAX_HEADING_CHARS: usize = 200;

/// Share of words that must start uppercase for title case.
pub const TITLE_CASE_RATIO: f32 = 0.6;

/// Normal line spacing as a multiple of the previous span's height.
pub const LINE_SPACING_FACTOR: f32 = 1.2;

/// A gap counts as whitespace above when it exceeds this many line spacings.
pub const WHITESPACE_GAP_FACTOR: f32 = 1.5;

/// Spans starting below this y are near the page bottom.
///
/// Tuned for A4 pages at default scale; not checked against the real page height.
pub const MAX_HEADING_Y: f32 = 700.0;

/// Indicators required for H1/H2 candidates.
pub const MIN_INDICATORS: usize = 1;

/// Indicators required for H3 candidates.
pub const MIN_INDICATORS_H3: usize = 2;

/// Extra indicators required for a non-bold H1/H2 candidate.
pub const NON_BOLD_PENALTY: usize = 1;

/// The five indicators computed for a candidate span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signals {
    pub title_case: bool,
    pub all_caps: bool,
    pub whitespace_above: bool,
    pub reasonable_position: bool,
    pub bold: bool,
}

impl Signals {
    /// Compute the indicators of `span` given the span read just before it.
    pub fn compute(span: &TextSpan, prev: Option<&TextSpan>) -> Self {
        Self {
            title_case: is_title_case(&span.text),
            all_caps: is_all_caps(&span.text),
            whitespace_above: has_whitespace_above(span, prev),
            reasonable_position: span.y < MAX_HEADING_Y,
            bold: span.is_bold,
        }
    }

    /// Number of indicators that hold.
    pub fn count(&self) -> usize {
        [
            self.title_case,
            self.all_caps,
            self.whitespace_above,
            self.reasonable_position,
            self.bold,
        ]
        .into_iter()
        .filter(|&s| s)
        .count()
    }
}

/// Full reasoning behind a classification decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Level whose font size the span matched
    pub candidate: Option<HeadingLevel>,
    /// Indicators, computed only for candidates within the length limit
    pub signals: Option<Signals>,
    /// Indicators needed for this candidate
    pub required: usize,
    /// Final decision
    pub is_heading: bool,
}

impl Verdict {
    fn rejected(candidate: Option<HeadingLevel>) -> Self {
        Self {
            candidate,
            signals: None,
            required: 0,
            is_heading: false,
        }
    }

    /// Heading level, set only when the span is a heading.
    pub fn level(&self) -> Option<HeadingLevel> {
        if self.is_heading {
            self.candidate
        } else {
            None
        }
    }
}

/// Classify a span: `Some(level)` when it is a heading.
///
/// `prev` is the span read immediately before this one in reading order.
pub fn classify(
    span: &TextSpan,
    hierarchy: &FontHierarchy,
    prev: Option<&TextSpan>,
) -> Option<HeadingLevel> {
    evaluate(span, hierarchy, prev).level()
}

/// Classify a span and keep every intermediate value.
pub fn evaluate(span: &TextSpan, hierarchy: &FontHierarchy, prev: Option<&TextSpan>) -> Verdict {
    let Some(level) = match_level(span.font_size, hierarchy) else {
        return Verdict::rejected(None);
    };

    if span.text.chars().count() > MAX_HEADING_CHARS {
        return Verdict::rejected(Some(level));
    }

    let signals = Signals::compute(span, prev);
    let required = required_indicators(level, span.is_bold);

    Verdict {
        candidate: Some(level),
        signals: Some(signals),
        required,
        is_heading: signals.count() >= required,
    }
}

/// First hierarchy level whose size is within [`FONT_SIZE_TOLERANCE`].
pub fn match_level(font_size: f32, hierarchy: &FontHierarchy) -> Option<HeadingLevel> {
    hierarchy
        .iter()
        .find(|(_, size)| (font_size - size).abs() < FONT_SIZE_TOLERANCE)
        .map(|(level, _)| level)
}

/// Indicators a candidate of `level` needs.
pub fn required_indicators(level: HeadingLevel, is_bold: bool) -> usize {
    let base = match level {
        HeadingLevel::H3 => MIN_INDICATORS_H3,
        HeadingLevel::H1 | HeadingLevel::H2 => MIN_INDICATORS,
    };
    let penalty = match level {
        HeadingLevel::H1 | HeadingLevel::H2 if !is_bold => NON_BOLD_PENALTY,
        _ => 0,
    };
    base + penalty
}

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// Whether at least [`TITLE_CASE_RATIO`] of the words start uppercase.
pub fn is_title_case(text: &str) -> bool {
    let (words, capitalized) = WORD
        .find_iter(text)
        .fold((0usize, 0usize), |(words, caps), word| {
            let upper = word
                .as_str()
                .chars()
                .next()
                .is_some_and(char::is_uppercase);
            (words + 1, caps + usize::from(upper))
        });

    words > 0 && capitalized as f32 / words as f32 >= TITLE_CASE_RATIO
}

/// Whether the text is upper case: some cased letter, no lowercase letter,
/// and more than one character once trimmed.
pub fn is_all_caps(text: &str) -> bool {
    let has_upper = text.chars().any(char::is_uppercase);
    let has_lower = text.chars().any(char::is_lowercase);
    has_upper && !has_lower && text.trim().chars().count() > 1
}

/// Whether there is clearly more than a line of space above the span.
///
/// With no previous span (start of the document) this holds.
pub fn has_whitespace_above(span: &TextSpan, prev: Option<&TextSpan>) -> bool {
    let Some(prev) = prev else {
        return true;
    };
    let gap = span.y - prev.bottom();
    let line_spacing = prev.height * LINE_SPACING_FACTOR;
    gap > line_spacing * WHITESPACE_GAP_FACTOR
}
