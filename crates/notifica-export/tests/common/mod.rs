#![allow(dead_code)]

use lopdf::Document as LopdfDocument;
use notifica_export::styles::Letterhead;

/// 4x2 px red PNG (landscape, aspect 0.5).
pub const PNG_4X2: &str = "iVBORw0KGgoAAAANSUhEUgAAAAQAAAACCAIAAADwyuo0AAAAEElEQVR4nGM4IScHRwzIHABvCgghBqXSdgAAAABJRU5ErkJggg==";
/// 2x4 px red PNG (portrait, aspect 2.0).
pub const PNG_2X4: &str = "iVBORw0KGgoAAAANSUhEUgAAAAIAAAAECAIAAAArjXluAAAAEElEQVR4nGM4IScHRAzYKAB3LAghbnBy5AAAAABJRU5ErkJggg==";
/// 3x3 px red PNG (square).
pub const PNG_3X3: &str = "iVBORw0KGgoAAAANSUhEUgAAAAMAAAADCAIAAADZSiLoAAAAEElEQVR4nGM4IScHQQxYWACPNAkl6ELpQAAAAABJRU5ErkJggg==";
/// 8x6 px red PNG (aspect 0.75).
pub const PNG_8X6: &str = "iVBORw0KGgoAAAANSUhEUgAAAAgAAAAGCAIAAABxZ0isAAAAEUlEQVR4nGM4ISeHFTEMpAQAaYgwwWSFouIAAAAASUVORK5CYII=";
/// 2x40 px red PNG (aspect 20, far taller than a page at grid width).
pub const PNG_2X40: &str = "iVBORw0KGgoAAAANSUhEUgAAAAIAAAAoCAIAAABb47wjAAAAEklEQVR42mP4z8AARAyjFCoFAOeNT7HE8hAFAAAAAElFTkSuQmCC";

/// Valid base64 that is not an image.
pub const NOT_AN_IMAGE: &str = "aGVsbG8gd29ybGQ=";
pub const NOT_BASE64: &str = "!!! definitely not base64 !!!";

/// Letterhead pointing at a logo that does not exist, so output does not
/// depend on the working directory.
pub fn letterhead_without_logo() -> Letterhead {
    Letterhead {
        logo_path: "/nonexistent/notifica/logo.png".to_string(),
        ..Letterhead::default()
    }
}

pub fn load(pdf: &[u8]) -> LopdfDocument {
    assert!(pdf.starts_with(b"%PDF-"), "output is not a PDF");
    LopdfDocument::load_mem(pdf).expect("output should parse as PDF")
}

pub fn page_count(doc: &LopdfDocument) -> usize {
    doc.get_pages().len()
}

/// Text of page `number` (1-based) with every whitespace run collapsed to a
/// single space, so wrapped lines and separate text objects read as prose.
pub fn page_text(doc: &LopdfDocument, number: u32) -> String {
    let text = doc
        .extract_text(&[number])
        .expect("page text should be extractable");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text of the whole document, pages joined by a space.
pub fn document_text(doc: &LopdfDocument) -> String {
    (1..=page_count(doc) as u32)
        .map(|number| page_text(doc, number))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of image XObjects embedded in the document.
pub fn image_count(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|object| object.as_stream().ok())
        .filter(|stream| {
            stream
                .dict
                .get(b"Subtype")
                .and_then(|subtype| subtype.as_name())
                .map(|name| name == b"Image")
                .unwrap_or(false)
        })
        .count()
}
