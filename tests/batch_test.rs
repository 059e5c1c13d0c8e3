//! Integration tests for directory batch processing.

mod common;

use std::fs;

use common::{report_pdf, write_file};
use pdfoutline::render::from_json;
use pdfoutline::{process_directory, BatchOptions, JsonFormat, OutlineExtractor};
use tempfile::TempDir;

#[test]
fn test_valid_and_corrupt_files() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_file(input.path(), "good.pdf", &report_pdf());
    write_file(input.path(), "bad.pdf", b"%PDF-1.4\n%%EOF garbage");
    write_file(input.path(), "readme.txt", b"ignored");

    let report = process_directory(
        &OutlineExtractor::new(),
        input.path(),
        output.path(),
        &BatchOptions::default(),
    )
    .unwrap();

    assert_eq!(report.total(), 2);
    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 1);

    // Sorted input order: bad.pdf, good.pdf
    assert!(report.entries[0].source.ends_with("bad.pdf"));
    assert!(report.entries[1].source.ends_with("good.pdf"));

    let mut written: Vec<_> = fs::read_dir(output.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, vec!["bad.json", "good.json"]);

    let bad = from_json(&fs::read_to_string(output.path().join("bad.json")).unwrap()).unwrap();
    assert!(bad.error.as_deref().is_some_and(|e| !e.is_empty()));
    assert!(bad.headings.is_empty());
    assert_eq!(bad.metadata.source_file, "bad.pdf");

    let good = from_json(&fs::read_to_string(output.path().join("good.json")).unwrap()).unwrap();
    assert!(good.error.is_none());
    assert_eq!(good.title, "Annual Report");
    assert_eq!(good.headings.len(), 4);
}

#[test]
fn test_sequential_matches_parallel() {
    let input = TempDir::new().unwrap();
    for i in 0..4 {
        write_file(input.path(), &format!("doc{}.pdf", i), &report_pdf());
    }
    write_file(input.path(), "broken.pdf", b"nope");

    let extractor = OutlineExtractor::new();
    let parallel_out = TempDir::new().unwrap();
    let sequential_out = TempDir::new().unwrap();

    let parallel = process_directory(
        &extractor,
        input.path(),
        parallel_out.path(),
        &BatchOptions::new(),
    )
    .unwrap();
    let sequential = process_directory(
        &extractor,
        input.path(),
        sequential_out.path(),
        &BatchOptions::new().sequential(),
    )
    .unwrap();

    assert_eq!(parallel.total(), 5);
    let outlines = |r: &pdfoutline::BatchReport| {
        r.entries
            .iter()
            .map(|e| e.outline.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(outlines(&parallel), outlines(&sequential));
}

#[test]
fn test_compact_output() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_file(input.path(), "report.pdf", &report_pdf());

    process_directory(
        &OutlineExtractor::new(),
        input.path(),
        output.path(),
        &BatchOptions::new().with_json_format(JsonFormat::Compact),
    )
    .unwrap();

    let json = fs::read_to_string(output.path().join("report.json")).unwrap();
    assert!(!json.contains('\n'));
    assert!(json.starts_with("{\"title\":\"Annual Report\",\"headings\":["));
}

#[test]
fn test_missing_input_dir_yields_empty_report() {
    let output = TempDir::new().unwrap();
    let report = process_directory(
        &OutlineExtractor::new(),
        output.path().join("absent"),
        output.path().join("out"),
        &BatchOptions::default(),
    )
    .unwrap();
    assert_eq!(report.total(), 0);
    assert!(output.path().join("out").is_dir());
}
