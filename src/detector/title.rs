//! Title detection.

use crate::model::{TextSpan, Title};

/// Page the title is taken from.
pub const TITLE_PAGE: u32 = 1;

/// Pick the document title from page-1 spans.
///
/// The title is the topmost span among those with the largest font size on
/// page 1. Sizes are compared exactly (they are already rounded to 2
/// decimals). When several candidates share the minimum `y`, the first one in
/// input order wins. Returns `None` when page 1 has no spans.
pub fn detect_title(spans: &[TextSpan]) -> Option<Title> {
    let first_page = || spans.iter().filter(|s| s.page_number == TITLE_PAGE);

    let max_font_size = first_page().map(|s| s.font_size).reduce(f32::max)?;

    first_page()
        .filter(|s| s.font_size == max_font_size)
        .reduce(|best, s| if s.y < best.y { s } else { best })
        .map(Title::from)
}
