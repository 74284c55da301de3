//! Field resolution: ordered fallback chains over the raw signals.
//!
//! Each resolver is a list of pure extractor steps tried in priority
//! order; precision decreases monotonically down a chain, and a step runs
//! only when every step before it produced nothing. Resolvers are total -
//! the file stem terminates the vendor and invoice chains, and the
//! financial sub-fields default to empty strings.

pub mod amounts;
pub mod invoice_no;
pub mod patterns;
pub mod vendor;

pub use amounts::{FinancialDetails, amount_candidates, resolve_financial};
pub use invoice_no::INVOICE_CHAIN;
pub use vendor::VENDOR_CHAIN;

use tracing::debug;

use crate::models::record::{InvoiceRecord, RawSignals};

/// One extraction step: a pure function over the signals, `None` when the
/// step has no answer.
pub type Step = fn(&RawSignals) -> Option<String>;

/// Walk a chain in order and take the first produced value; the file stem
/// is the terminal fallback shared by all string chains.
pub fn resolve_chain(chain: &[Step], signals: &RawSignals) -> String {
    chain
        .iter()
        .find_map(|step| step(signals))
        .unwrap_or_else(|| signals.file_stem.clone())
}

/// Compose one candidate record from a document's signals.
///
/// No cross-field validation happens here - the chains are best-effort
/// heuristics, not validators.
pub fn assemble_record(signals: &RawSignals) -> InvoiceRecord {
    let vendor_number = resolve_chain(VENDOR_CHAIN, signals);
    let invoice_number = resolve_chain(INVOICE_CHAIN, signals);
    let financial = resolve_financial(signals);

    debug!(
        vendor = %vendor_number,
        invoice = %invoice_number,
        total = %financial.invoice_total,
        "assembled record"
    );

    InvoiceRecord {
        vendor_number,
        invoice_number,
        invoice_total: financial.invoice_total,
        invoice_net_amount: financial.invoice_net_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn assembled_record_always_has_all_fields() {
        let record = assemble_record(&RawSignals::from_stem("fallback_doc"));
        assert_eq!(record.vendor_number, "fallback_doc");
        assert_eq!(record.invoice_number, "fallback_doc");
        assert_eq!(record.invoice_total, "");
        assert_eq!(record.invoice_net_amount, "");
    }

    #[test]
    fn assembly_is_deterministic() {
        let signals = RawSignals {
            text: "Vendor #: 123456 Invoice No: INV-1 Total $99.00".to_string(),
            file_stem: "doc".to_string(),
            ..Default::default()
        };
        let first = assemble_record(&signals);
        let second = assemble_record(&signals);
        assert_eq!(first, second);
        assert_eq!(first.vendor_number, "00123456");
        assert_eq!(first.invoice_number, "INV-1");
        assert_eq!(first.invoice_total, "99.00");
        assert_eq!(first.invoice_net_amount, "99.00");
    }
}
