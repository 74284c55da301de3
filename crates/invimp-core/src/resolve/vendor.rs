//! Vendor number resolution.

use crate::models::record::{RawSignals, non_empty};

use super::Step;
use super::patterns::{VENDOR_LABELED, VENDOR_STANDALONE};

/// Fallback chain for the vendor number, highest confidence first. The
/// standalone step accepts false positives rather than produce nothing;
/// the file stem (applied by [`super::resolve_chain`]) makes the resolver
/// total.
pub const VENDOR_CHAIN: &[Step] = &[from_model, labeled, standalone];

fn from_model(signals: &RawSignals) -> Option<String> {
    non_empty(&signals.structured.vendor_number).map(str::to_string)
}

/// Label-anchored 6-8 digit match, left-zero-padded to 8 digits.
fn labeled(signals: &RawSignals) -> Option<String> {
    VENDOR_LABELED
        .captures(&signals.text)
        .map(|caps| format!("{:0>8}", &caps[1]))
}

fn standalone(signals: &RawSignals) -> Option<String> {
    VENDOR_STANDALONE
        .find(&signals.text)
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::super::resolve_chain;
    use super::*;
    use crate::models::record::StructuredFields;
    use pretty_assertions::assert_eq;

    fn signals(text: &str) -> RawSignals {
        RawSignals {
            text: text.to_string(),
            file_stem: "invoice_batch_07".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn model_field_wins_verbatim() {
        let mut s = signals("Vendor #: 123456");
        s.structured = StructuredFields {
            vendor_number: Some("V-99".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_chain(VENDOR_CHAIN, &s), "V-99");
    }

    #[test]
    fn labeled_match_is_zero_padded() {
        assert_eq!(resolve_chain(VENDOR_CHAIN, &signals("Vendor #: 123456")), "00123456");
    }

    #[test]
    fn eight_digit_label_is_not_padded_further() {
        assert_eq!(
            resolve_chain(VENDOR_CHAIN, &signals("acct number: 87654321")),
            "87654321"
        );
    }

    #[test]
    fn standalone_eight_digits_as_last_text_resort() {
        assert_eq!(
            resolve_chain(VENDOR_CHAIN, &signals("remit to box 12345678 today")),
            "12345678"
        );
    }

    #[test]
    fn file_stem_when_no_textual_signal() {
        assert_eq!(
            resolve_chain(VENDOR_CHAIN, &signals("no numbers here")),
            "invoice_batch_07"
        );
    }

    #[test]
    fn empty_model_field_falls_through() {
        let mut s = signals("Vendor #: 123456");
        s.structured.vendor_number = Some(String::new());
        assert_eq!(resolve_chain(VENDOR_CHAIN, &s), "00123456");
    }
}
