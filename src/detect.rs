//! PDF file recognition: extension matching and header sniffing.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// File extensions treated as PDF input (compared case-insensitively).
pub const PDF_EXTENSIONS: &[&str] = &["pdf"];

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Leading bytes searched for the header; readers accept junk before it.
pub const HEADER_SEARCH_LEN: usize = 1024;

/// Check whether a path carries a PDF extension.
///
/// Only the name is inspected; the file does not need to exist.
pub fn has_pdf_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            PDF_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Read the header of a file and return its PDF version (e.g. `"1.7"`).
pub fn sniff_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut header = Vec::with_capacity(HEADER_SEARCH_LEN);
    File::open(path)?
        .take(HEADER_SEARCH_LEN as u64)
        .read_to_end(&mut header)?;
    sniff_bytes(&header)
}

/// Return the PDF version announced by the header of a document.
///
/// The `%PDF-` marker may follow up to [`HEADER_SEARCH_LEN`] bytes of
/// leading garbage.
///
/// # Errors
/// * `Error::UnknownFormat` if no `%PDF-` marker is found in the search window
/// * `Error::UnsupportedVersion` if the version is not of the form `d.d`
pub fn sniff_bytes(data: &[u8]) -> Result<String> {
    let window = &data[..data.len().min(HEADER_SEARCH_LEN)];
    let start = window
        .windows(PDF_MAGIC.len())
        .position(|w| w == PDF_MAGIC)
        .ok_or(Error::UnknownFormat)?;
    let rest = &data[start + PDF_MAGIC.len()..];
    let version_bytes = rest.get(..VERSION_LEN).ok_or(Error::UnknownFormat)?;
    let version = String::from_utf8_lossy(version_bytes).to_string();

    match version_bytes {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => Ok(version),
        _ => Err(Error::UnsupportedVersion(version)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_matching() {
        assert!(has_pdf_extension("report.pdf"));
        assert!(has_pdf_extension("REPORT.PDF"));
        assert!(has_pdf_extension("/some/dir/a.Pdf"));
        assert!(!has_pdf_extension("report.pdf.json"));
        assert!(!has_pdf_extension("pdf"));
        assert!(!has_pdf_extension("notes.txt"));
    }

    #[test]
    fn test_sniff_valid_header() {
        assert_eq!(sniff_bytes(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3").unwrap(), "1.7");
        assert_eq!(sniff_bytes(b"%PDF-2.0\n").unwrap(), "2.0");
    }

    #[test]
    fn test_sniff_rejects_other_formats() {
        assert!(matches!(sniff_bytes(b"<!DOCTYPE html>"), Err(Error::UnknownFormat)));
        assert!(matches!(sniff_bytes(b"%PDF"), Err(Error::UnknownFormat)));
        assert!(matches!(sniff_bytes(b""), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_sniff_skips_leading_bytes() {
        assert_eq!(sniff_bytes(b"\r\n%PDF-1.4\n").unwrap(), "1.4");

        let mut data = vec![b' '; HEADER_SEARCH_LEN - PDF_MAGIC.len()];
        data.extend_from_slice(b"%PDF-1.6\n");
        assert_eq!(sniff_bytes(&data).unwrap(), "1.6");

        let mut late = vec![b' '; HEADER_SEARCH_LEN];
        late.extend_from_slice(b"%PDF-1.6\n");
        assert!(matches!(sniff_bytes(&late), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_sniff_bad_version() {
        assert!(matches!(
            sniff_bytes(b"%PDF-abc\n"),
            Err(Error::UnsupportedVersion(v)) if v == "abc"
        ));
    }
}
