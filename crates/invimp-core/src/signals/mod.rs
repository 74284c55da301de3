//! Signal providers: independent, imperfect evidence sources feeding the
//! resolvers.
//!
//! Every provider is an owned object behind a trait so the pipeline can be
//! driven with fakes in tests. Providers never fail the document - a
//! provider with nothing to say returns an empty signal.

mod chat_model;

pub use chat_model::ChatModelClient;

use async_trait::async_trait;

use crate::models::record::{RawSignals, StructuredFields, Table};
use crate::models::config::PdfConfig;
use crate::pdf;

/// The learned document model, reduced to one opaque signal source: a
/// best-effort mapping from the fixed field vocabulary to strings.
#[async_trait]
pub trait ModelExtractor: Send + Sync {
    /// Extract structured fields from the document text. Returns the empty
    /// mapping when the model has nothing, fails, or is disabled.
    async fn extract(&self, text: &str) -> StructuredFields;
}

/// Model-less extraction: always the empty mapping.
pub struct NullModel;

#[async_trait]
impl ModelExtractor for NullModel {
    async fn extract(&self, _text: &str) -> StructuredFields {
        StructuredFields::default()
    }
}

/// Tabular-layout extraction over raw document bytes.
pub trait TableExtractor: Send + Sync {
    /// Cell grids found in the document, outermost table first.
    fn extract_tables(&self, bytes: &[u8]) -> Vec<Table>;
}

/// No tabular extraction backend wired in.
pub struct NoopTables;

impl TableExtractor for NoopTables {
    fn extract_tables(&self, _bytes: &[u8]) -> Vec<Table> {
        Vec::new()
    }
}

/// Run all providers for one document and bundle the signals.
///
/// Total: provider failures collapse into empty signals, so every document
/// yields a usable bundle.
pub async fn gather_signals(
    pdf_bytes: &[u8],
    file_stem: &str,
    pdf_config: &PdfConfig,
    model: &dyn ModelExtractor,
    tables: &dyn TableExtractor,
) -> RawSignals {
    let text = match pdf::extract_text(pdf_bytes, pdf_config) {
        Ok(outcome) => outcome.into_text(),
        Err(e) => {
            tracing::warn!(error = %e, "text provider failed, continuing without text");
            String::new()
        }
    };

    let structured = model.extract(&text).await;
    let table_rows = tables.extract_tables(pdf_bytes);

    RawSignals {
        text,
        structured,
        tables: table_rows,
        file_stem: file_stem.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn unreadable_document_still_yields_signals() {
        let signals = gather_signals(
            b"not a pdf",
            "fallback_name",
            &PdfConfig::default(),
            &NullModel,
            &NoopTables,
        )
        .await;

        assert_eq!(signals.text, "");
        assert!(signals.structured.is_empty());
        assert!(signals.tables.is_empty());
        assert_eq!(signals.file_stem, "fallback_name");
    }
}
