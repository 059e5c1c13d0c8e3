//! Shared helpers: small PDFs generated with lopdf.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// One line of text placed with its own BT/ET block.
pub struct Line {
    pub font: &'static str,
    pub size: i64,
    pub x: i64,
    pub baseline: i64,
    pub text: &'static str,
}

/// Regular text (`F1`, Helvetica).
pub fn regular(size: i64, baseline: i64, text: &'static str) -> Line {
    Line {
        font: "F1",
        size,
        x: 72,
        baseline,
        text,
    }
}

/// Bold text (`F2`, Helvetica-Bold).
pub fn bold(size: i64, baseline: i64, text: &'static str) -> Line {
    Line {
        font: "F2",
        ..regular(size, baseline, text)
    }
}

/// Where the generated document declares its MediaBox.
#[derive(Clone, Copy)]
pub enum MediaBox {
    /// On every page dictionary.
    Page([i64; 4]),
    /// Only on the `/Pages` root, inherited by the pages.
    Root([i64; 4]),
}

/// Build a US Letter PDF with one content stream per page.
pub fn build_pdf(pages: &[Vec<Line>]) -> Vec<u8> {
    build_pdf_with_box(pages, MediaBox::Page([0, 0, 612, 792]))
}

fn box_object(coords: [i64; 4]) -> Object {
    Object::Array(coords.iter().map(|&c| Object::Integer(c)).collect())
}

/// Build a PDF with one content stream per page and the given MediaBox.
pub fn build_pdf_with_box(pages: &[Vec<Line>], media_box: MediaBox) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for line in lines {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec![line.font.into(), line.size.into()],
            ));
            operations.push(Operation::new(
                "Td",
                vec![line.x.into(), line.baseline.into()],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(line.text)]));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content encodes"),
        ));
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        };
        if let MediaBox::Page(coords) = media_box {
            page.set("MediaBox", box_object(coords));
        }
        let page_id = doc.add_object(page);
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let mut root = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
    };
    if let MediaBox::Root(coords) = media_box {
        root.set("MediaBox", box_object(coords));
    }
    doc.objects.insert(pages_id, Object::Dictionary(root));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("document saves");
    buffer
}

/// Two-page report: title, two sections on page 1, an appendix on page 2.
pub fn report_pdf() -> Vec<u8> {
    build_pdf(&[
        vec![
            bold(24, 720, "Annual Report"),
            bold(16, 660, "Introduction"),
            regular(11, 640, "this report covers the results of the year"),
            bold(16, 580, "Results"),
            regular(11, 560, "revenue grew in every region we operate in"),
        ],
        vec![
            bold(16, 720, "Appendix"),
            regular(11, 700, "supporting tables follow"),
        ],
    ])
}

/// Write `bytes` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("test file written");
    path
}
