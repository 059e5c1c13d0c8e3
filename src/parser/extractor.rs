//! Text span extraction from page content streams.
//!
//! Walks the text operators of each page and emits one [`TextSpan`] per run
//! of same-styled text on a line. Positions are converted from PDF user
//! space (origin bottom-left) to top-left page coordinates. Glyph metrics
//! are not read from the font program; widths and the ascent are estimated
//! from the font size.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use super::backend::{BackendFontInfo, ContentOp, PageBox, PageId, PdfBackend, PdfValue};
use super::options::{ErrorMode, ParseOptions};
use crate::error::{Error, Result};
use crate::model::{font_name_is_bold, font_name_is_italic, round2, TextSpan};

/// Share of the font size above the baseline.
const ASCENT: f32 = 0.8;

/// Estimated glyph advance as a share of the font size.
const AVG_CHAR_WIDTH: f32 = 0.5;

/// TJ adjustments larger than this (thousandths of an em) read as a word space.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Baselines closer than this are on the same line.
const SAME_LINE_TOLERANCE: f32 = 0.5;

/// A horizontal jump wider than this many font sizes starts a new span.
const MAX_MERGE_GAP: f32 = 1.0;

/// Extracts spans from every page of a document.
pub struct SpanExtractor<'a, B: PdfBackend + ?Sized> {
    backend: &'a B,
    options: ParseOptions,
}

impl<'a, B: PdfBackend + ?Sized> SpanExtractor<'a, B> {
    /// Create an extractor with default options.
    pub fn new(backend: &'a B) -> Self {
        Self::with_options(backend, ParseOptions::default())
    }

    /// Create an extractor with custom options.
    pub fn with_options(backend: &'a B, options: ParseOptions) -> Self {
        Self { backend, options }
    }

    /// Extract spans from all pages, page by page in content-stream order.
    ///
    /// In lenient mode a page that cannot be decoded is logged and skipped.
    pub fn extract_document(&self) -> Result<Vec<TextSpan>> {
        let mut spans = Vec::new();

        for (page_num, page_id) in self.backend.pages() {
            match self.extract_page(page_num, page_id) {
                Ok(page_spans) => {
                    log::debug!("Page {}: {} span(s)", page_num, page_spans.len());
                    spans.extend(page_spans);
                }
                Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                    log::warn!("Skipping page {}: {}", page_num, e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(spans)
    }

    /// Extract spans from a page by its 1-based number.
    pub fn extract_page_number(&self, page_num: u32) -> Result<Vec<TextSpan>> {
        let pages = self.backend.pages();
        match pages.get(&page_num) {
            Some(&page_id) => self.extract_page(page_num, page_id),
            None => Err(Error::PageOutOfRange(page_num, pages.len() as u32)),
        }
    }

    /// Extract spans from a single page.
    pub fn extract_page(&self, page_num: u32, page_id: PageId) -> Result<Vec<TextSpan>> {
        let fonts = match self.backend.page_fonts(page_id) {
            Ok(fonts) => fonts.into_iter().map(|f| (f.name.clone(), f)).collect(),
            Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("Page {}: font resources unreadable: {}", page_num, e);
                HashMap::new()
            }
            Err(e) => return Err(e),
        };

        let content = self.backend.page_content(page_id)?;
        let ops = self.backend.decode_content(&content)?;
        let page_box = self.backend.page_box(page_id);

        let mut walker = PageWalker {
            backend: self.backend,
            page_id,
            page_num,
            page_box,
            fonts,
            normalize: self.options.normalize_text,
            state: TextState::default(),
            pending: None,
            spans: Vec::new(),
        };
        for op in &ops {
            walker.apply(op);
        }
        Ok(walker.finish())
    }
}

/// Affine transform `[a b c d e f]` as used by `cm` and `Tm`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Matrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Matrix {
    const IDENTITY: Matrix = Matrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    fn from_operands(op: &ContentOp) -> Self {
        Self {
            a: op.number(0, 1.0),
            b: op.number(1, 0.0),
            c: op.number(2, 0.0),
            d: op.number(3, 1.0),
            e: op.number(4, 0.0),
            f: op.number(5, 0.0),
        }
    }

    fn translation(tx: f32, ty: f32) -> Self {
        Self {
            e: tx,
            f: ty,
            ..Self::IDENTITY
        }
    }

    /// `self × other`: apply `self`, then `other`.
    fn multiply(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    fn horizontal_scale(&self) -> f32 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    fn vertical_scale(&self) -> f32 {
        (self.c * self.c + self.d * self.d).sqrt()
    }
}

#[derive(Debug, Clone)]
struct TextState {
    ctm: Matrix,
    ctm_stack: Vec<Matrix>,
    text_matrix: Matrix,
    line_matrix: Matrix,
    leading: f32,
    font_key: Vec<u8>,
    font_size: f32,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            ctm: Matrix::IDENTITY,
            ctm_stack: Vec::new(),
            text_matrix: Matrix::IDENTITY,
            line_matrix: Matrix::IDENTITY,
            leading: 0.0,
            font_key: Vec::new(),
            font_size: 12.0,
        }
    }
}

impl TextState {
    fn move_line(&mut self, tx: f32, ty: f32) {
        self.line_matrix = Matrix::translation(tx, ty).multiply(&self.line_matrix);
        self.text_matrix = self.line_matrix;
    }

    fn next_line(&mut self) {
        self.move_line(0.0, -self.leading);
    }
}

/// Text of the span being assembled, in page user space.
#[derive(Debug)]
struct PendingRun {
    text: String,
    font_key: Vec<u8>,
    size: f32,
    x_start: f32,
    x_end: f32,
    baseline: f32,
}

struct PageWalker<'a, B: PdfBackend + ?Sized> {
    backend: &'a B,
    page_id: PageId,
    page_num: u32,
    page_box: PageBox,
    fonts: HashMap<Vec<u8>, BackendFontInfo>,
    normalize: bool,
    state: TextState,
    pending: Option<PendingRun>,
    spans: Vec<TextSpan>,
}

impl<B: PdfBackend + ?Sized> PageWalker<'_, B> {
    fn apply(&mut self, op: &ContentOp) {
        match op.operator.as_str() {
            "q" => self.state.ctm_stack.push(self.state.ctm),
            "Q" => {
                if let Some(ctm) = self.state.ctm_stack.pop() {
                    self.state.ctm = ctm;
                }
            }
            "cm" => {
                self.state.ctm = Matrix::from_operands(op).multiply(&self.state.ctm);
            }
            "BT" => {
                self.state.text_matrix = Matrix::IDENTITY;
                self.state.line_matrix = Matrix::IDENTITY;
            }
            "Tf" => {
                if let Some(PdfValue::Name(name)) = op.operands.first() {
                    self.state.font_key = name.clone();
                }
                self.state.font_size = op.number(1, self.state.font_size);
            }
            "TL" => self.state.leading = op.number(0, 0.0),
            "Td" => self.state.move_line(op.number(0, 0.0), op.number(1, 0.0)),
            "TD" => {
                let ty = op.number(1, 0.0);
                self.state.leading = -ty;
                self.state.move_line(op.number(0, 0.0), ty);
            }
            "Tm" => {
                self.state.line_matrix = Matrix::from_operands(op);
                self.state.text_matrix = self.state.line_matrix;
            }
            "T*" => self.state.next_line(),
            "Tj" => {
                if let Some(PdfValue::Str(bytes)) = op.operands.first() {
                    let text = self.decode(bytes);
                    let advance = self.glyph_advance(&text);
                    self.show(text, advance);
                }
            }
            "TJ" => {
                if let Some(PdfValue::Array(items)) = op.operands.first() {
                    let (text, advance) = self.decode_array(items);
                    self.show(text, advance);
                }
            }
            "'" | "\"" => {
                self.state.next_line();
                let text_idx = if op.operator == "\"" { 2 } else { 0 };
                if let Some(PdfValue::Str(bytes)) = op.operands.get(text_idx) {
                    let text = self.decode(bytes);
                    let advance = self.glyph_advance(&text);
                    self.show(text, advance);
                }
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<TextSpan> {
        self.flush();
        self.spans
    }

    fn decode(&self, bytes: &[u8]) -> String {
        self.backend
            .decode_text(self.page_id, &self.state.font_key, bytes)
    }

    /// Estimated advance of `text` in unscaled text space.
    fn glyph_advance(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.state.font_size * AVG_CHAR_WIDTH
    }

    /// Decode a TJ array: strings plus positioning adjustments.
    fn decode_array(&self, items: &[PdfValue]) -> (String, f32) {
        let mut combined = String::new();
        let mut advance = 0.0;

        for item in items {
            match item {
                PdfValue::Str(bytes) => {
                    let decoded = self.decode(bytes);
                    advance += self.glyph_advance(&decoded);
                    combined.push_str(&decoded);
                }
                PdfValue::Integer(_) | PdfValue::Real(_) => {
                    // Negative values move the next glyph right
                    let adjustment = -item.as_number().unwrap_or(0.0);
                    advance += adjustment / 1000.0 * self.state.font_size;
                    let ends_open = combined
                        .chars()
                        .last()
                        .is_some_and(|c| !c.is_whitespace() && !is_spaceless_script_char(c));
                    if adjustment > TJ_SPACE_THRESHOLD && ends_open {
                        combined.push(' ');
                    }
                }
                _ => {}
            }
        }

        (combined, advance)
    }

    /// Place shown text on the page and advance the text matrix.
    fn show(&mut self, text: String, advance: f32) {
        let trm = self.state.text_matrix.multiply(&self.state.ctm);
        let size = self.state.font_size * trm.vertical_scale();
        let x = trm.e;
        let baseline = trm.f;
        let width = advance * trm.horizontal_scale();

        self.state.text_matrix = Matrix::translation(advance, 0.0).multiply(&self.state.text_matrix);

        if text.is_empty() {
            return;
        }

        if let Some(run) = self.pending.as_mut() {
            let same_style =
                run.font_key == self.state.font_key && (run.size - size).abs() < 0.01;
            let same_line = (run.baseline - baseline).abs() < SAME_LINE_TOLERANCE;
            let gap = x - run.x_end;
            if same_style && same_line && x >= run.x_start && gap <= size * MAX_MERGE_GAP {
                if needs_space(&run.text, &text, gap, size) {
                    run.text.push(' ');
                }
                run.text.push_str(&text);
                run.x_end = run.x_end.max(x + width);
                return;
            }
        }

        if text.trim().is_empty() {
            return;
        }

        self.flush();
        self.pending = Some(PendingRun {
            text,
            font_key: self.state.font_key.clone(),
            size,
            x_start: x,
            x_end: x + width,
            baseline,
        });
    }

    fn flush(&mut self) {
        let Some(run) = self.pending.take() else {
            return;
        };

        let trimmed = run.text.trim();
        let text: String = if self.normalize {
            trimmed.nfc().collect()
        } else {
            trimmed.to_string()
        };
        if text.is_empty() {
            return;
        }

        let font = self.fonts.get(&run.font_key);
        let font_name = font
            .map(|f| f.base_font.clone())
            .unwrap_or_else(|| String::from_utf8_lossy(&run.font_key).to_string());
        let is_bold = font_name_is_bold(&font_name) || font.is_some_and(|f| f.flag_bold());
        let is_italic = font_name_is_italic(&font_name) || font.is_some_and(|f| f.flag_italic());

        // Top-left origin at the MediaBox corner
        let left = run.x_start - self.page_box.left;
        let top = self.page_box.top - (run.baseline + ASCENT * run.size);

        self.spans.push(TextSpan {
            text,
            font_size: round2(run.size),
            page_number: self.page_num,
            x: round2(left),
            y: round2(top),
            width: round2(run.x_end - run.x_start),
            height: round2(run.size),
            is_bold,
            is_italic,
            font_name,
        });
    }
}

/// Whether a space belongs between two pieces of text shown `gap` apart.
fn needs_space(prev: &str, next: &str, gap: f32, size: f32) -> bool {
    let threshold = size * AVG_CHAR_WIDTH * 0.2;
    let prev_last = prev.chars().last();
    let next_first = next.chars().next();

    let already_spaced = prev_last.map_or(true, char::is_whitespace)
        || next_first.map_or(true, char::is_whitespace);
    let both_spaceless = prev_last.is_some_and(is_spaceless_script_char)
        && next_first.is_some_and(is_spaceless_script_char);

    gap > threshold && !already_spaced && !both_spaceless
}

/// Check if character is from a script that doesn't use word spaces.
/// Chinese and Japanese don't use spaces between words, but Korean does.
fn is_spaceless_script_char(c: char) -> bool {
    let code = c as u32;

    // CJK Unified Ideographs and Extension A
    (0x4E00..=0x9FFF).contains(&code)
    || (0x3400..=0x4DBF).contains(&code)
    // Extensions B-F
    || (0x20000..=0x2EBEF).contains(&code)
    // Hiragana, Katakana
    || (0x3040..=0x30FF).contains(&code)
    // CJK Symbols and Punctuation
    || (0x3000..=0x303F).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// Backend serving prepared operations for a set of pages.
    struct FakeBackend {
        pages: Vec<Vec<ContentOp>>,
        fonts: Vec<BackendFontInfo>,
        broken_page: Option<u32>,
        page_box: PageBox,
    }

    impl FakeBackend {
        fn new(pages: Vec<Vec<ContentOp>>) -> Self {
            Self {
                pages,
                fonts: vec![
                    BackendFontInfo {
                        name: b"F1".to_vec(),
                        base_font: "Helvetica".to_string(),
                        flags: 0,
                    },
                    BackendFontInfo {
                        name: b"F2".to_vec(),
                        base_font: "Helvetica-Bold".to_string(),
                        flags: 0,
                    },
                    BackendFontInfo {
                        name: b"F3".to_vec(),
                        base_font: "ABCDEF+Garamond".to_string(),
                        flags: super::super::backend::FLAG_ITALIC,
                    },
                ],
                broken_page: None,
                page_box: super::super::backend::DEFAULT_PAGE_BOX,
            }
        }
    }

    impl PdfBackend for FakeBackend {
        fn pages(&self) -> BTreeMap<u32, PageId> {
            (1..=self.pages.len() as u32).map(|n| (n, (n, 0))).collect()
        }

        fn page_box(&self, _page: PageId) -> PageBox {
            self.page_box
        }

        fn page_fonts(&self, _page: PageId) -> Result<Vec<BackendFontInfo>> {
            Ok(self.fonts.clone())
        }

        fn page_content(&self, page: PageId) -> Result<Vec<u8>> {
            if Some(page.0) == self.broken_page {
                return Err(Error::PdfParse("Invalid content stream".to_string()));
            }
            Ok(page.0.to_be_bytes().to_vec())
        }

        fn decode_content(&self, data: &[u8]) -> Result<Vec<ContentOp>> {
            let page = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
            Ok(self.pages[(page - 1) as usize].clone())
        }

        fn decode_text(&self, _page: PageId, _font: &[u8], bytes: &[u8]) -> String {
            super::super::backend::decode_text_simple(bytes)
        }
    }

    fn op(operator: &str, operands: Vec<PdfValue>) -> ContentOp {
        ContentOp::new(operator, operands)
    }

    fn num(v: f32) -> PdfValue {
        PdfValue::Real(v)
    }

    fn text(s: &str) -> PdfValue {
        PdfValue::Str(s.as_bytes().to_vec())
    }

    fn font(name: &str, size: f32) -> ContentOp {
        op("Tf", vec![PdfValue::Name(name.as_bytes().to_vec()), num(size)])
    }

    fn show_at(font_name: &str, size: f32, x: f32, y: f32, s: &str) -> Vec<ContentOp> {
        vec![
            op("BT", vec![]),
            font(font_name, size),
            op("Td", vec![num(x), num(y)]),
            op("Tj", vec![text(s)]),
            op("ET", vec![]),
        ]
    }

    #[test]
    fn test_single_span_geometry() {
        let backend = FakeBackend::new(vec![show_at("F2", 20.0, 72.0, 700.0, "Title")]);
        let spans = SpanExtractor::new(&backend).extract_document().unwrap();

        assert_eq!(spans.len(), 1);
        let span = &spans[0];
        assert_eq!(span.text, "Title");
        assert_eq!(span.font_size, 20.0);
        assert_eq!(span.page_number, 1);
        assert_eq!(span.x, 72.0);
        // 792 - (700 + 0.8 * 20)
        assert_eq!(span.y, 76.0);
        assert_eq!(span.height, 20.0);
        assert_eq!(span.width, 50.0);
        assert!(span.is_bold);
        assert!(!span.is_italic);
        assert_eq!(span.font_name, "Helvetica-Bold");
    }

    #[test]
    fn test_geometry_follows_media_box_origin() {
        let mut backend = FakeBackend::new(vec![show_at("F1", 10.0, 72.0, 872.0, "Offset")]);
        backend.page_box = PageBox::from_corners(0.0, 100.0, 612.0, 892.0);
        let spans = SpanExtractor::new(&backend).extract_document().unwrap();
        // 892 - (872 + 0.8 * 10)
        assert_eq!(spans[0].y, 12.0);
        assert_eq!(spans[0].x, 72.0);

        backend.page_box = PageBox::from_corners(50.0, 100.0, 662.0, 892.0);
        let spans = SpanExtractor::new(&backend).extract_document().unwrap();
        assert_eq!(spans[0].x, 22.0);
        assert_eq!(spans[0].y, 12.0);
    }

    #[test]
    fn test_text_matrix_scales_font_size() {
        let ops = vec![
            op("BT", vec![]),
            font("F1", 1.0),
            op("Tm", vec![num(14.0), num(0.0), num(0.0), num(14.0), num(50.0), num(600.0)]),
            op("Tj", vec![text("Scaled")]),
            op("ET", vec![]),
        ];
        let backend = FakeBackend::new(vec![ops]);
        let spans = SpanExtractor::new(&backend).extract_document().unwrap();
        assert_eq!(spans[0].font_size, 14.0);
        assert_eq!(spans[0].x, 50.0);
    }

    #[test]
    fn test_ctm_is_applied() {
        let mut ops = vec![op("q", vec![]), op("cm", vec![num(2.0), num(0.0), num(0.0), num(2.0), num(0.0), num(0.0)])];
        ops.extend(show_at("F1", 10.0, 36.0, 300.0, "Doubled"));
        ops.push(op("Q", vec![]));
        ops.extend(show_at("F1", 10.0, 36.0, 300.0, "Plain"));

        let backend = FakeBackend::new(vec![ops]);
        let spans = SpanExtractor::new(&backend).extract_document().unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].font_size, 20.0);
        assert_eq!(spans[0].x, 72.0);
        assert_eq!(spans[1].font_size, 10.0);
        assert_eq!(spans[1].x, 36.0);
    }

    #[test]
    fn test_adjacent_runs_merge_into_one_span() {
        let ops = vec![
            op("BT", vec![]),
            font("F1", 10.0),
            op("Td", vec![num(72.0), num(500.0)]),
            op("Tj", vec![text("Hello")]),
            op("Tj", vec![text(" world")]),
            op("ET", vec![]),
        ];
        let backend = FakeBackend::new(vec![ops]);
        let spans = SpanExtractor::new(&backend).extract_document().unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Hello world");
    }

    #[test]
    fn test_style_change_splits_spans() {
        let ops = vec![
            op("BT", vec![]),
            font("F2", 10.0),
            op("Td", vec![num(72.0), num(500.0)]),
            op("Tj", vec![text("Note:")]),
            font("F1", 10.0),
            op("Tj", vec![text("details follow")]),
            op("ET", vec![]),
        ];
        let backend = FakeBackend::new(vec![ops]);
        let spans = SpanExtractor::new(&backend).extract_document().unwrap();
        let texts: Vec<_> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Note:", "details follow"]);
        assert!(spans[0].is_bold);
        assert!(!spans[1].is_bold);
    }

    #[test]
    fn test_tj_array_word_spacing() {
        let ops = vec![
            op("BT", vec![]),
            font("F1", 12.0),
            op("Td", vec![num(72.0), num(400.0)]),
            op(
                "TJ",
                vec![PdfValue::Array(vec![
                    text("Key"),
                    PdfValue::Integer(-40),
                    text("word"),
                    PdfValue::Integer(-250),
                    text("Search"),
                ])],
            ),
            op("ET", vec![]),
        ];
        let backend = FakeBackend::new(vec![ops]);
        let spans = SpanExtractor::new(&backend).extract_document().unwrap();
        assert_eq!(spans[0].text, "Keyword Search");
    }

    #[test]
    fn test_next_line_uses_leading() {
        let ops = vec![
            op("BT", vec![]),
            font("F1", 10.0),
            op("TL", vec![num(14.0)]),
            op("Td", vec![num(72.0), num(500.0)]),
            op("Tj", vec![text("first")]),
            op("T*", vec![]),
            op("Tj", vec![text("second")]),
            op("'", vec![text("third")]),
            op("ET", vec![]),
        ];
        let backend = FakeBackend::new(vec![ops]);
        let spans = SpanExtractor::new(&backend).extract_document().unwrap();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].y - spans[0].y, 14.0);
        assert_eq!(spans[2].y - spans[1].y, 14.0);
        assert_eq!(spans[2].x, 72.0);
    }

    #[test]
    fn test_descriptor_flags_mark_italic() {
        let backend = FakeBackend::new(vec![show_at("F3", 11.0, 72.0, 500.0, "Emphasis")]);
        let spans = SpanExtractor::new(&backend).extract_document().unwrap();
        assert!(spans[0].is_italic);
        assert!(!spans[0].is_bold);
    }

    #[test]
    fn test_whitespace_only_text_is_skipped() {
        let mut ops = show_at("F1", 10.0, 72.0, 500.0, "   ");
        ops.extend(show_at("F1", 10.0, 72.0, 400.0, "kept"));
        let backend = FakeBackend::new(vec![ops]);
        let spans = SpanExtractor::new(&backend).extract_document().unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "kept");
    }

    #[test]
    fn test_pages_are_numbered_and_kept_in_stream_order() {
        let mut page1 = show_at("F1", 10.0, 72.0, 100.0, "bottom first");
        page1.extend(show_at("F1", 10.0, 72.0, 700.0, "top second"));
        let page2 = show_at("F1", 10.0, 72.0, 700.0, "page two");

        let backend = FakeBackend::new(vec![page1, page2]);
        let spans = SpanExtractor::new(&backend).extract_document().unwrap();
        let pages: Vec<_> = spans.iter().map(|s| (s.page_number, s.text.as_str())).collect();
        assert_eq!(
            pages,
            vec![(1, "bottom first"), (1, "top second"), (2, "page two")]
        );
    }

    #[test]
    fn test_lenient_skips_broken_page() {
        let mut backend = FakeBackend::new(vec![
            show_at("F1", 10.0, 72.0, 700.0, "one"),
            show_at("F1", 10.0, 72.0, 700.0, "two"),
        ]);
        backend.broken_page = Some(1);

        let spans = SpanExtractor::new(&backend).extract_document().unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].page_number, 2);

        let strict = SpanExtractor::with_options(&backend, ParseOptions::new().strict());
        assert!(strict.extract_document().is_err());
    }

    #[test]
    fn test_extract_page_number() {
        let backend = FakeBackend::new(vec![
            show_at("F1", 10.0, 72.0, 700.0, "one"),
            show_at("F1", 10.0, 72.0, 700.0, "two"),
        ]);
        let extractor = SpanExtractor::new(&backend);

        let spans = extractor.extract_page_number(2).unwrap();
        assert_eq!(spans[0].text, "two");
        assert_eq!(spans[0].page_number, 2);

        let err = extractor.extract_page_number(3).unwrap_err();
        assert!(matches!(err, Error::PageOutOfRange(3, 2)));
    }

    #[test]
    fn test_normalization() {
        // "e" + combining acute accent
        let backend = FakeBackend::new(vec![show_at("F1", 10.0, 72.0, 700.0, "Caf\u{65}\u{301}")]);
        let spans = SpanExtractor::new(&backend).extract_document().unwrap();
        assert_eq!(spans[0].text, "Caf\u{e9}");

        let raw = SpanExtractor::with_options(&backend, ParseOptions::new().with_normalization(false))
            .extract_document()
            .unwrap();
        assert_eq!(raw[0].text, "Caf\u{65}\u{301}");
    }

    #[test]
    fn test_needs_space() {
        assert!(needs_space("Hello", "world", 3.0, 10.0));
        assert!(!needs_space("Hello", "world", 0.5, 10.0));
        assert!(!needs_space("Hello ", "world", 3.0, 10.0));
        assert!(!needs_space("漢", "字", 3.0, 10.0));
    }
}
