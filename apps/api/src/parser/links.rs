//! Binary Reader: pulls hyperlink targets out of PDF link annotations.
//!
//! Clickable links in a resume (GitHub profile behind an icon, LinkedIn
//! behind the candidate's name) live in annotation dictionaries, not in the
//! visible text, so `pdf-extract` never sees them.

use lopdf::{Document, Object};

use crate::parser::error::ParseError;

/// Collects URI targets from `/Subtype /Link` annotations across all pages.
///
/// Returns unique URIs in first-seen order, scanning pages in increasing
/// page order. Annotations without a URI action (internal navigation) and
/// unresolvable references are skipped, never fatal; only a document that
/// fails to open at all errors.
pub fn extract_embedded_links(pdf_bytes: &[u8]) -> Result<Vec<String>, ParseError> {
    let doc = Document::load_mem(pdf_bytes).map_err(|e| ParseError::DocumentParse(e.to_string()))?;

    let mut links: Vec<String> = Vec::new();
    // get_pages is keyed by page number, so iteration is already page-ordered
    for (_, page_id) in doc.get_pages() {
        let Ok(page_dict) = doc.get_object(page_id).and_then(Object::as_dict) else {
            continue;
        };
        let Ok(annots_obj) = page_dict.get(b"Annots") else {
            continue; // page has no annotations
        };
        let annots_obj = match annots_obj {
            Object::Reference(id) => match doc.get_object(*id) {
                Ok(resolved) => resolved,
                Err(_) => continue,
            },
            other => other,
        };
        let Ok(annots) = annots_obj.as_array() else {
            continue;
        };

        for entry in annots {
            // Entries may be direct dictionaries or indirect references
            let annot_obj = match entry {
                Object::Reference(id) => match doc.get_object(*id) {
                    Ok(resolved) => resolved,
                    Err(_) => continue,
                },
                other => other,
            };
            let Ok(annot) = annot_obj.as_dict() else {
                continue;
            };
            match annot.get(b"Subtype") {
                Ok(Object::Name(name)) if name.as_slice() == b"Link" => {}
                _ => continue,
            }
            if let Some(uri) = link_uri(&doc, annot) {
                if !uri.is_empty() && !links.contains(&uri) {
                    links.push(uri);
                }
            }
        }
    }

    Ok(links)
}

/// Resolves a Link annotation's `/A` action to its `/URI` string.
/// Non-URI actions (GoTo and friends) yield None.
fn link_uri(doc: &Document, annot: &lopdf::Dictionary) -> Option<String> {
    let action_obj = annot.get(b"A").ok()?;
    let action_obj = match action_obj {
        Object::Reference(id) => doc.get_object(*id).ok()?,
        other => other,
    };
    let action = action_obj.as_dict().ok()?;

    match action.get(b"S") {
        Ok(Object::Name(kind)) if kind.as_slice() == b"URI" => {}
        _ => return None,
    }

    let uri_obj = action.get(b"URI").ok()?;
    let uri_obj = match uri_obj {
        Object::Reference(id) => doc.get_object(*id).ok()?,
        other => other,
    };
    match uri_obj {
        Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}
