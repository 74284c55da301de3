//! PDF text provider using lopdf and pdf-extract.
//!
//! Best effort by contract: the resolvers must tolerate empty text, so
//! extraction degrades instead of failing wherever possible.

use lopdf::Document;
use tracing::{debug, info, warn};

use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Outcome of text extraction for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfText {
    /// The PDF carried extractable text.
    Text(String),
    /// The PDF looks scanned / image-only; OCR is outside this pipeline.
    Scanned,
}

impl PdfText {
    /// The text signal handed to the resolvers; empty for scanned PDFs.
    pub fn into_text(self) -> String {
        match self {
            PdfText::Text(text) => text,
            PdfText::Scanned => String::new(),
        }
    }
}

/// Extract the text signal from raw PDF bytes.
///
/// Errors only on structurally unreadable input; a readable PDF without
/// usable text yields `PdfText::Scanned`.
pub fn extract_text(bytes: &[u8], config: &PdfConfig) -> Result<PdfText, PdfError> {
    let doc = Document::load_mem(bytes).map_err(|e| PdfError::Parse(e.to_string()))?;

    if doc.get_pages().is_empty() {
        return Err(PdfError::NoPages);
    }

    if looks_like_scanned(&doc, config.scanned_page_ratio) {
        info!("structural check: likely scanned, skipping text extraction");
        return Ok(PdfText::Scanned);
    }

    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => {
            let meaningful = text.chars().filter(|c| !c.is_whitespace()).count();
            if meaningful < config.min_text_chars {
                debug!(chars = meaningful, "extracted text too short, treating as scanned");
                Ok(PdfText::Scanned)
            } else {
                debug!(chars = meaningful, "text extracted");
                Ok(PdfText::Text(text))
            }
        }
        Err(e) => {
            warn!(error = %e, "text extraction failed, treating as scanned");
            Ok(PdfText::Scanned)
        }
    }
}

/// Inspect the page tree for pages that carry XObject images but no Font
/// resources. Above the configured ratio the whole document counts as
/// scanned.
fn looks_like_scanned(doc: &Document, ratio_threshold: f64) -> bool {
    let pages = doc.get_pages();
    if pages.is_empty() {
        return false;
    }

    let mut image_only_pages = 0usize;

    for object_id in pages.values() {
        let Ok(page_obj) = doc.get_object(*object_id) else {
            continue;
        };
        let Ok(page_dict) = page_obj.as_dict() else {
            continue;
        };

        let resource = |key: &[u8]| {
            page_dict
                .get(b"Resources")
                .ok()
                .and_then(|r| doc.dereference(r).ok())
                .and_then(|(_, resolved)| resolved.as_dict().ok())
                .and_then(|res| res.get(key).ok())
                .and_then(|v| doc.dereference(v).ok())
                .and_then(|(_, resolved)| resolved.as_dict().ok())
                .is_some_and(|d| !d.is_empty())
        };

        if resource(b"XObject") && !resource(b"Font") {
            image_only_pages += 1;
        }
    }

    let ratio = image_only_pages as f64 / pages.len() as f64;
    debug!(
        total_pages = pages.len(),
        image_only = image_only_pages,
        "scanned-page analysis"
    );

    ratio >= ratio_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let result = extract_text(b"this is not a pdf", &PdfConfig::default());
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }

    #[test]
    fn scanned_outcome_maps_to_empty_text() {
        assert_eq!(PdfText::Scanned.into_text(), "");
        assert_eq!(PdfText::Text("hi".to_string()).into_text(), "hi");
    }
}
