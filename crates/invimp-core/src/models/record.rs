//! Data model for the resolution pipeline.

use serde::{Deserialize, Serialize};

/// A cell grid extracted from one tabular region: rows of cells.
pub type Table = Vec<Vec<String>>;

/// Best-effort structured output of the document model.
///
/// The vocabulary is fixed; `None` means the model produced no signal for
/// that field, which is distinct from an empty string. The resolvers treat
/// empty strings as absent as well.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredFields {
    pub vendor_number: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_id: Option<String>,
    pub invoice_no: Option<String>,
    pub invoice_total: Option<String>,
    pub invoice_net_amount: Option<String>,
}

impl StructuredFields {
    /// True if no field carries a value.
    pub fn is_empty(&self) -> bool {
        [
            &self.vendor_number,
            &self.invoice_number,
            &self.invoice_id,
            &self.invoice_no,
            &self.invoice_total,
            &self.invoice_net_amount,
        ]
        .into_iter()
        .all(|f| non_empty(f).is_none())
    }
}

/// Normalize an optional field: empty or whitespace-only strings count as
/// no signal.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Everything the resolvers may consult for one document.
///
/// Immutable once built; consumed by the record assembler and not retained.
#[derive(Debug, Clone, Default)]
pub struct RawSignals {
    /// Raw text extracted from the document, possibly empty.
    pub text: String,

    /// Structured output of the document model, possibly empty.
    pub structured: StructuredFields,

    /// Tabular regions, outermost first. Possibly empty.
    pub tables: Vec<Table>,

    /// Document file name without extension. Terminal fallback only.
    pub file_stem: String,
}

impl RawSignals {
    /// Signals carrying nothing but the file stem.
    pub fn from_stem(file_stem: impl Into<String>) -> Self {
        Self {
            file_stem: file_stem.into(),
            ..Self::default()
        }
    }
}

/// One resolved accounting import row set, prior to serialization.
///
/// All four fields are always present. The amounts are decimal text with
/// two fractional digits and may be empty when nothing resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub vendor_number: String,
    pub invoice_number: String,
    pub invoice_total: String,
    pub invoice_net_amount: String,
}

impl InvoiceRecord {
    /// Key identifying a logical invoice across duplicate attachments.
    ///
    /// Not a true domain unique constraint; used only for deduplication.
    pub fn business_key(&self) -> (&str, &str) {
        (&self.vendor_number, &self.invoice_number)
    }
}
