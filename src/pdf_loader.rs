//! PDF loading utilities.
//!
//! This module is intentionally small: it opens the PDF container, counts
//! its pages, and pulls the title out of the document information dictionary
//! when one exists. Rendering the page content is someone else's job; the
//! viewer only needs the geometry-defining facts about the document.

use anyhow::{Context, Result};
use lopdf::{Document, Object};
use std::path::Path;
use tracing::{info, warn};

/// The facts about a document the viewer needs to lay itself out.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub page_count: usize,
    pub title: Option<String>,
}

/// Open a PDF from disk and report its page count and title.
///
/// A document with zero pages is unusual but not an error: the caller keeps
/// its default geometry and the viewer still comes up.
pub fn load_document(path: &Path) -> Result<LoadedDocument> {
    info!(path = %path.display(), "Opening PDF");
    let doc = Document::load(path)
        .with_context(|| format!("Failed to open PDF at {}", path.display()))?;

    let page_count = doc.get_pages().len();
    let title = document_title(&doc);

    if page_count == 0 {
        warn!(path = %path.display(), "PDF reports zero pages");
    }
    info!(
        page_count,
        title = title.as_deref().unwrap_or("<untitled>"),
        "Finished loading PDF"
    );

    Ok(LoadedDocument { page_count, title })
}

/// Title from the trailer's Info dictionary, if present and non-empty.
fn document_title(doc: &Document) -> Option<String> {
    let info = doc.trailer.get(b"Info").ok()?;
    let dict = match info {
        Object::Reference(id) => doc.get_dictionary(*id).ok()?,
        Object::Dictionary(dict) => dict,
        _ => return None,
    };
    match dict.get(b"Title").ok()? {
        Object::String(bytes, _) => {
            let title = String::from_utf8_lossy(bytes).trim().to_string();
            if title.is_empty() { None } else { Some(title) }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_contextual_error() {
        let err = load_document(Path::new("/nonexistent/book.pdf")).unwrap_err();
        assert!(
            err.to_string().contains("/nonexistent/book.pdf"),
            "error should name the path: {err}"
        );
    }

    #[test]
    fn title_lookup_tolerates_documents_without_info() {
        let doc = Document::with_version("1.5");
        assert!(document_title(&doc).is_none());
    }
}
