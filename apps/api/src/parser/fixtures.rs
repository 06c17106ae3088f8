//! lopdf-built fixture PDFs shared by the parser tests.

use lopdf::{dictionary, Document, Object, Stream};

/// One fixture page: visible text lines plus Link-annotation URIs.
#[derive(Default)]
pub struct Page<'a> {
    pub lines: &'a [&'a str],
    pub link_uris: &'a [&'a str],
}

/// Builds a minimal but well-formed PDF with the given pages.
/// Each URI becomes a `/Subtype /Link` annotation with a `/S /URI` action,
/// referenced indirectly from the page's `/Annots` array.
pub fn build_pdf(pages: &[Page]) -> Vec<u8> {
    let mut doc = Document::with_version("1.4");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut page_ids = Vec::new();
    for page in pages {
        let mut content = String::from("BT /F1 12 Tf 72 720 Td ");
        for (i, line) in page.lines.iter().enumerate() {
            if i > 0 {
                content.push_str("0 -14 Td ");
            }
            content.push('(');
            content.push_str(&escape_pdf_text(line));
            content.push_str(") Tj ");
        }
        content.push_str("ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

        let annot_refs: Vec<Object> = page
            .link_uris
            .iter()
            .map(|uri| {
                let action_id = doc.add_object(dictionary! {
                    "Type" => "Action",
                    "S" => "URI",
                    "URI" => Object::string_literal(*uri),
                });
                doc.add_object(dictionary! {
                    "Type" => "Annot",
                    "Subtype" => "Link",
                    "Rect" => vec![72.into(), 700.into(), 300.into(), 712.into()],
                    "A" => action_id,
                })
                .into()
            })
            .collect();

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => resources_id,
            "Contents" => content_id,
        };
        if !annot_refs.is_empty() {
            page_dict.set("Annots", annot_refs);
        }
        page_ids.push(doc.add_object(page_dict));
    }

    let kids: Vec<Object> = page_ids.iter().map(|&id| id.into()).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(page_ids.len() as i64),
    });
    for page_id in &page_ids {
        if let Ok(page) = doc.get_object_mut(*page_id) {
            if let Object::Dictionary(ref mut dict) = page {
                dict.set("Parent", pages_id);
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .expect("failed to serialize fixture PDF");
    buffer
}

/// Single page of text lines, no annotations.
pub fn text_pdf(lines: &[&str]) -> Vec<u8> {
    build_pdf(&[Page {
        lines,
        link_uris: &[],
    }])
}

fn escape_pdf_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}
