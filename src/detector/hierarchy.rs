//! Font size hierarchy: which font size signals which heading level.

use crate::model::{HeadingLevel, TextSpan};

/// Default minimum gap between two font sizes for them to count as distinct levels.
pub const DEFAULT_MIN_FONT_SIZE_DIFF: f32 = 1.0;

/// Mapping from heading level to the font size that marks it in one document.
///
/// Holds at most three entries, strictly decreasing in size, each at least
/// `min_font_size_diff` below the previous one. A level without an entry
/// cannot be produced for this document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontHierarchy {
    levels: Vec<(HeadingLevel, f32)>,
}

impl FontHierarchy {
    /// Build the hierarchy from every span of a document (all pages).
    ///
    /// Distinct sizes are walked from largest to smallest; a size is kept
    /// only if it sits at least `min_font_size_diff` below the last kept one.
    /// The first three kept sizes become H1, H2 and H3.
    pub fn build(spans: &[TextSpan], min_font_size_diff: f32) -> Self {
        let mut sizes: Vec<f32> = spans.iter().map(|s| s.font_size).collect();
        sizes.sort_by(|a, b| b.total_cmp(a));
        sizes.dedup();

        let mut kept: Vec<f32> = Vec::with_capacity(HeadingLevel::ALL.len());
        for size in sizes {
            if kept.len() == HeadingLevel::ALL.len() {
                break;
            }
            match kept.last() {
                Some(&last) if last - size < min_font_size_diff => continue,
                _ => kept.push(size),
            }
        }

        let levels = HeadingLevel::ALL.into_iter().zip(kept).collect();
        Self { levels }
    }

    /// Font size assigned to a level, if the document has one.
    pub fn size_of(&self, level: HeadingLevel) -> Option<f32> {
        self.levels
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, size)| *size)
    }

    /// Levels with their sizes, H1 first.
    pub fn iter(&self) -> impl Iterator<Item = (HeadingLevel, f32)> + '_ {
        self.levels.iter().copied()
    }

    /// Number of levels present.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether no level could be derived.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
