//! Financial details resolution: invoice total and net amount.

use rust_decimal::Decimal;
use std::str::FromStr;

use tracing::trace;

use crate::models::record::{RawSignals, Table, non_empty};

use super::patterns::{CURRENCY_AMOUNT, DECIMAL_AMOUNT};

/// Resolved financial sub-fields. Either may be empty when no signal
/// produced a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinancialDetails {
    pub invoice_total: String,
    pub invoice_net_amount: String,
}

/// Resolve both sub-fields. Each falls back independently, but they share
/// one candidate scan over the text. Never fails; malformed amounts are
/// skipped, not reported.
pub fn resolve_financial(signals: &RawSignals) -> FinancialDetails {
    let mut details = FinancialDetails::default();

    // Model fields take precedence per sub-field
    if let Some(total) = non_empty(&signals.structured.invoice_total) {
        details.invoice_total = total.to_string();
    }
    if let Some(net) = non_empty(&signals.structured.invoice_net_amount) {
        details.invoice_net_amount = net.to_string();
    }

    let candidates = amount_candidates(&signals.text);
    trace!(count = candidates.len(), "currency amount candidates");

    // The grand total is typically the largest monetary figure on the page
    if details.invoice_total.is_empty() {
        if let Some(max) = candidates.iter().max() {
            details.invoice_total = format!("{max:.2}");
        }
    }

    if details.invoice_net_amount.is_empty() {
        if candidates.len() > 1 {
            let mut sorted = candidates.clone();
            sorted.sort_by(|a, b| b.cmp(a));
            details.invoice_net_amount = format!("{:.2}", sorted[1]);
        } else if let Some(only) = candidates.first() {
            // A single amount on the page means total and net are assumed
            // equal
            details.invoice_net_amount = format!("{only:.2}");
        }
    }

    // Table fallback applies to the total only; the net amount is rarely
    // the terminal table cell
    if details.invoice_total.is_empty() {
        if let Some(cell) = bottom_right_amount(&signals.tables) {
            details.invoice_total = cell;
        }
    }

    details
}

/// All currency-marked amounts in document order. Unparseable matches are
/// dropped silently.
pub fn amount_candidates(text: &str) -> Vec<Decimal> {
    CURRENCY_AMOUNT
        .captures_iter(text)
        .filter_map(|caps| Decimal::from_str(&caps[1].replace(',', "")).ok())
        .collect()
}

/// Bottom-right cell of the first table, accepted only when it leads with
/// a decimal amount. Thousand separators are stripped; the cell text is
/// otherwise passed through.
fn bottom_right_amount(tables: &[Table]) -> Option<String> {
    let cell = tables.first()?.last()?.last()?;
    DECIMAL_AMOUNT
        .is_match(cell)
        .then(|| cell.replace(',', ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::StructuredFields;
    use pretty_assertions::assert_eq;

    fn signals(text: &str) -> RawSignals {
        RawSignals {
            text: text.to_string(),
            file_stem: "doc".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn single_candidate_fills_both_fields() {
        let details = resolve_financial(&signals("Amount due: $1,234.56"));
        assert_eq!(details.invoice_total, "1234.56");
        assert_eq!(details.invoice_net_amount, "1234.56");
    }

    #[test]
    fn max_and_second_largest() {
        let details = resolve_financial(&signals("Subtotal $450.00\nTotal $500.00"));
        assert_eq!(details.invoice_total, "500.00");
        assert_eq!(details.invoice_net_amount, "450.00");
    }

    #[test]
    fn tied_maximum_reuses_the_value_for_net() {
        let details = resolve_financial(&signals("$500.00 then again $500.00"));
        assert_eq!(details.invoice_total, "500.00");
        assert_eq!(details.invoice_net_amount, "500.00");
    }

    #[test]
    fn model_fields_win_per_sub_field() {
        let mut s = signals("Total $999.99");
        s.structured = StructuredFields {
            invoice_total: Some("100.00".to_string()),
            ..Default::default()
        };
        let details = resolve_financial(&s);
        assert_eq!(details.invoice_total, "100.00");
        // net still resolves from the shared candidate scan
        assert_eq!(details.invoice_net_amount, "999.99");
    }

    #[test]
    fn no_signal_leaves_fields_empty() {
        let details = resolve_financial(&signals("no monetary values here"));
        assert_eq!(details, FinancialDetails::default());
    }

    #[test]
    fn unmarked_amounts_are_not_candidates() {
        let details = resolve_financial(&signals("qty 1,000.00 items"));
        assert_eq!(details.invoice_total, "");
    }

    #[test]
    fn table_fallback_for_total_only() {
        let mut s = signals("no currency markers");
        s.tables = vec![vec![
            vec!["Item".to_string(), "Amount".to_string()],
            vec!["Total".to_string(), "2,345.67".to_string()],
        ]];
        let details = resolve_financial(&s);
        assert_eq!(details.invoice_total, "2345.67");
        assert_eq!(details.invoice_net_amount, "");
    }

    #[test]
    fn table_cell_without_amount_shape_is_rejected() {
        let mut s = signals("");
        s.tables = vec![vec![vec!["grand total".to_string()]]];
        let details = resolve_financial(&s);
        assert_eq!(details.invoice_total, "");
    }

    #[test]
    fn text_candidates_outrank_table_fallback() {
        let mut s = signals("Total $10.00");
        s.tables = vec![vec![vec!["99.99".to_string()]]];
        let details = resolve_financial(&s);
        assert_eq!(details.invoice_total, "10.00");
    }

    #[test]
    fn thousands_separators_are_normalized() {
        let details = resolve_financial(&signals("USD 12,345.00 and $1,000.00"));
        assert_eq!(details.invoice_total, "12345.00");
        assert_eq!(details.invoice_net_amount, "1000.00");
    }
}
