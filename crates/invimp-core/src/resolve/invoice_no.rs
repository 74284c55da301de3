//! Invoice number resolution.

use crate::models::record::{RawSignals, non_empty};

use super::Step;
use super::patterns::{INVOICE_AFTER_DATE, INVOICE_LABELED, INVOICE_STRUCTURAL};

/// Fallback chain for the invoice number. Within every regex step the
/// first left-to-right match wins; there is no scoring across matches.
pub const INVOICE_CHAIN: &[Step] = &[from_model, labeled, after_date, structural];

/// `invoice_number`, then `invoice_id`, then `invoice_no` - first
/// populated model field wins, in that fixed order.
fn from_model(signals: &RawSignals) -> Option<String> {
    let fields = &signals.structured;
    non_empty(&fields.invoice_number)
        .or_else(|| non_empty(&fields.invoice_id))
        .or_else(|| non_empty(&fields.invoice_no))
        .map(str::to_string)
}

fn labeled(signals: &RawSignals) -> Option<String> {
    INVOICE_LABELED
        .captures(&signals.text)
        .map(|caps| caps[1].trim().to_string())
}

/// Some layouts print the invoice number right after the invoice date on
/// the same line.
fn after_date(signals: &RawSignals) -> Option<String> {
    INVOICE_AFTER_DATE
        .captures(&signals.text)
        .map(|caps| caps[1].to_string())
}

fn structural(signals: &RawSignals) -> Option<String> {
    INVOICE_STRUCTURAL
        .find(&signals.text)
        .map(|m| m.as_str().to_string())
}
