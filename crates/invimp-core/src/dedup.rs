//! Record deduplication on the (vendor, invoice) business key.

use std::collections::HashSet;

use tracing::debug;

use crate::models::record::InvoiceRecord;

/// Collapse records sharing a business key, first occurrence wins.
///
/// Output order equals the order of first appearance in the input, so the
/// result is deterministic for a deterministic input order. Later
/// duplicates are dropped whole - no field merging, even when a duplicate
/// carries more complete data.
pub fn dedup_records(records: Vec<InvoiceRecord>) -> Vec<InvoiceRecord> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut unique = Vec::with_capacity(records.len());

    for record in records {
        let (vendor, invoice) = record.business_key();
        if seen.insert((vendor.to_string(), invoice.to_string())) {
            unique.push(record);
        } else {
            debug!(vendor, invoice, "dropping duplicate invoice");
        }
    }

    unique
}
