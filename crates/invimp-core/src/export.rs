//! Munis AP import serialization.
//!
//! Every retained record becomes exactly two rows: a type "1" header row
//! and a type "2" detail row. Column order and presence are fixed - the
//! downstream import rejects anything else. Pure formatting; the only
//! failure mode is an unwritable target.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::ExportError;
use crate::models::config::ExportConfig;
use crate::models::record::InvoiceRecord;

/// Fixed header row of the import file.
const HEADER: [&str; 14] = [
    "Row Type",
    "Vendor Number",
    "Remit Number",
    "Invoice Number",
    "Invoice Date",
    "Invoice Due Date",
    "Invoice Total",
    "Invoice Net Amount",
    "PO Fiscal Year",
    "PO Number",
    "Include Documentation",
    "Separate Check",
    "Contract Number",
    "Invoice Description",
];

/// Serialize records into an open writer.
pub fn write_munis<W: Write>(
    writer: W,
    records: &[InvoiceRecord],
    config: &ExportConfig,
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(HEADER)?;

    for record in records {
        // Header row: shared identifiers plus accounting metadata
        wtr.write_record([
            "1",
            record.vendor_number.as_str(),
            config.remit_number.as_str(),
            record.invoice_number.as_str(),
            config.invoice_date.as_str(),
            config.invoice_due_date.as_str(),
            record.invoice_total.as_str(),
            record.invoice_net_amount.as_str(),
            config.po_fiscal_year.as_str(),
            config.po_number.as_str(),
            config.include_documentation.as_str(),
            config.separate_check.as_str(),
            config.contract_number.as_str(),
            config.invoice_description.as_str(),
        ])?;

        // Detail row: same identifiers, distribution columns
        wtr.write_record([
            "2",
            record.vendor_number.as_str(),
            config.sequence_start.as_str(),
            record.invoice_number.as_str(),
            config.default_org.as_str(),
            config.default_object.as_str(),
            config.project.as_str(),
            record.invoice_total.as_str(),
            config.po_line_number.as_str(),
            "",
            "",
            "",
            "",
            config.detail_description.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Serialize records to a file path.
pub fn write_munis_file(
    path: &Path,
    records: &[InvoiceRecord],
    config: &ExportConfig,
) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_munis(file, records, config)?;
    info!(path = %path.display(), invoices = records.len(), "wrote import file");
    Ok(())
}
