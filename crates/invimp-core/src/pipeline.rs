//! Single-pass pipeline driver: documents in, candidate records out.
//!
//! Processing is strictly sequential and side-effect free per document;
//! the only state crossing document boundaries is the record list owned by
//! the caller.

use tracing::info;

use crate::eml;
use crate::error::EmlError;
use crate::models::config::InvimpConfig;
use crate::models::record::InvoiceRecord;
use crate::resolve::assemble_record;
use crate::signals::{ModelExtractor, TableExtractor, gather_signals};

/// Owned provider set plus configuration for one run.
pub struct Pipeline<'a> {
    config: &'a InvimpConfig,
    model: &'a dyn ModelExtractor,
    tables: &'a dyn TableExtractor,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a InvimpConfig,
        model: &'a dyn ModelExtractor,
        tables: &'a dyn TableExtractor,
    ) -> Self {
        Self {
            config,
            model,
            tables,
        }
    }

    /// Resolve one PDF document into a candidate record. Never fails.
    pub async fn process_document(&self, file_stem: &str, pdf_bytes: &[u8]) -> InvoiceRecord {
        let signals = gather_signals(
            pdf_bytes,
            file_stem,
            &self.config.pdf,
            self.model,
            self.tables,
        )
        .await;

        assemble_record(&signals)
    }

    /// Resolve every PDF attachment of one message.
    ///
    /// `message_stem` is the message file base name; it is the terminal
    /// fallback for all attachments of the message.
    pub async fn process_message(
        &self,
        raw_message: &[u8],
        message_stem: &str,
    ) -> Result<Vec<InvoiceRecord>, EmlError> {
        let attachments = eml::pdf_attachments(raw_message)?;

        let mut records = Vec::with_capacity(attachments.len());
        for attachment in &attachments {
            records.push(self.process_document(message_stem, &attachment.data).await);
        }

        info!(
            message = message_stem,
            attachments = attachments.len(),
            "message processed"
        );
        Ok(records)
    }
}
