//! Final outline assembly.

use crate::model::{Heading, Outline, OutlineEntry, Title};

/// Assemble the outline from detected headings and the optional title.
///
/// Headings keep the order they are given in; nothing is filtered or sorted.
/// Metadata is left at its default for the caller to fill in.
pub fn build_outline(headings: &[Heading], title: Option<&Title>) -> Outline {
    Outline {
        title: title.map(|t| t.text.clone()).unwrap_or_default(),
        headings: headings.iter().map(OutlineEntry::from).collect(),
        ..Default::default()
    }
}
