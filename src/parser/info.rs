//! Document information dictionary.

use chrono::{DateTime, Utc};
use lopdf::{Dictionary, Document as LopdfDocument, Object};
use serde::{Deserialize, Serialize};

/// Basic properties of a loaded PDF.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// PDF version (e.g., "1.7")
    pub pdf_version: String,

    /// Total number of pages
    pub page_count: u32,

    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,

    /// Creator application
    pub creator: Option<String>,

    /// PDF producer
    pub producer: Option<String>,

    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,

    /// Whether the document is encrypted
    pub encrypted: bool,
}

pub(crate) fn read_document_info(doc: &LopdfDocument) -> DocumentInfo {
    let mut info = DocumentInfo {
        pdf_version: doc.version.to_string(),
        page_count: doc.get_pages().len() as u32,
        encrypted: doc.is_encrypted(),
        ..Default::default()
    };

    let info_dict = doc
        .trailer
        .get(b"Info")
        .ok()
        .and_then(|o| o.as_reference().ok())
        .and_then(|r| doc.get_dictionary(r).ok());

    if let Some(dict) = info_dict {
        info.title = get_string_from_dict(dict, b"Title");
        info.author = get_string_from_dict(dict, b"Author");
        info.subject = get_string_from_dict(dict, b"Subject");
        info.keywords = get_string_from_dict(dict, b"Keywords");
        info.creator = get_string_from_dict(dict, b"Creator");
        info.producer = get_string_from_dict(dict, b"Producer");
        info.created = get_string_from_dict(dict, b"CreationDate").and_then(|d| parse_pdf_date(&d));
        info.modified = get_string_from_dict(dict, b"ModDate").and_then(|d| parse_pdf_date(&d));
    }

    info
}

/// Helper to get a string from a PDF dictionary.
fn get_string_from_dict(dict: &Dictionary, key: &[u8]) -> Option<String> {
    let value = match dict.get(key).ok()? {
        Object::String(bytes, _) => Some(super::backend::decode_text_simple(bytes)),
        Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    };
    value.filter(|s| !s.trim().is_empty())
}

/// Parse a PDF date string (D:YYYYMMDDHHmmSSOHH'mm').
fn parse_pdf_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.strip_prefix("D:").unwrap_or(s);

    let year: i32 = s.get(0..4)?.parse().ok()?;
    let field = |range: std::ops::Range<usize>, default: u32| {
        s.get(range).and_then(|v| v.parse().ok()).unwrap_or(default)
    };

    chrono::NaiveDate::from_ymd_opt(year, field(4..6, 1), field(6..8, 1))
        .and_then(|date| date.and_hms_opt(field(8..10, 0), field(10..12, 0), field(12..14, 0)))
        .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
}
