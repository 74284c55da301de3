//! Compiled regex patterns shared by the field resolvers.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Vendor / account number behind an explicit label, 6-8 digits
    pub static ref VENDOR_LABELED: Regex = Regex::new(
        r"(?i)(?:vendor|acct(?:ount)?)\s*(?:#|number)[:\s]*([0-9]{6,8})"
    ).unwrap();

    // Last-resort vendor heuristic: any standalone 8-digit token
    pub static ref VENDOR_STANDALONE: Regex = Regex::new(
        r"\b\d{8}\b"
    ).unwrap();

    // Invoice number behind a label, with optional "no." / "#" / "number"
    pub static ref INVOICE_LABELED: Regex = Regex::new(
        r"(?i)invoice\s*(?:no\.?|#|number)?\s*[:\-]?\s*([A-Z0-9\-/]{4,20})"
    ).unwrap();

    // Invoice number printed right after a date token on the same line
    pub static ref INVOICE_AFTER_DATE: Regex = Regex::new(
        r"\d{1,2}/\d{1,2}/\d{2,4}\s+([A-Z0-9\-]{5,})"
    ).unwrap();

    // Known vendor numbering convention: 2 digits, 3 uppercase letters,
    // 6+ digits
    pub static ref INVOICE_STRUCTURAL: Regex = Regex::new(
        r"\b\d{2}[A-Z]{3}\d{6,}\b"
    ).unwrap();

    // Currency-marked amount with exactly two fractional digits and
    // optional comma thousands. The leading non-digit alternation keeps a
    // digit from running into the currency code.
    pub static ref CURRENCY_AMOUNT: Regex = Regex::new(
        r"(?:^|[^0-9])(?:USD|US\$|\$|£|€)\s*([\d,]+\.\d{2})"
    ).unwrap();

    // Bare decimal amount, anchored at the start of a table cell
    pub static ref DECIMAL_AMOUNT: Regex = Regex::new(
        r"^[\d,]+\.\d{2}"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_label_variants() {
        for text in [
            "Vendor #: 123456",
            "vendor number 1234567",
            "Acct #: 12345678",
            "acct number: 654321",
        ] {
            assert!(VENDOR_LABELED.is_match(text), "no match in {text:?}");
        }
    }

    #[test]
    fn spelled_out_account_label_is_not_recognized() {
        // the label alternation covers "acct", never the spelled-out word
        assert!(!VENDOR_LABELED.is_match("Account number: 654321"));
    }

    #[test]
    fn currency_amount_requires_marker() {
        assert!(CURRENCY_AMOUNT.is_match("Total: $1,234.56"));
        assert!(CURRENCY_AMOUNT.is_match("USD 99.00 due"));
        assert!(CURRENCY_AMOUNT.is_match("€45.10"));
        assert!(!CURRENCY_AMOUNT.is_match("quantity 1,234.56"));
    }

    #[test]
    fn currency_amount_ignores_digit_prefix() {
        // "3USD" reads as a quantity, not a currency marker
        assert!(!CURRENCY_AMOUNT.is_match("3USD 12.00"));
    }

    #[test]
    fn structural_invoice_number() {
        let m = INVOICE_STRUCTURAL.find("ref 24ABC123456 enclosed").unwrap();
        assert_eq!(m.as_str(), "24ABC123456");
        assert!(!INVOICE_STRUCTURAL.is_match("24abc123456"));
    }
}
