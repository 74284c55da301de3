//! Inspect command - resolve a single file and print the records.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use invimp_core::{InvoiceRecord, NoopTables, Pipeline};

use super::{build_model, load_config};

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Input file (.eml or .pdf)
    #[arg(required = true)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: InspectArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("input file not found: {}", args.input.display());
    }

    let stem = args
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
        .to_string();

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let model = build_model(&config);
    let pipeline = Pipeline::new(&config, model.as_ref(), &NoopTables);

    let raw = fs::read(&args.input)?;
    let records = match extension.as_str() {
        "eml" => pipeline.process_message(&raw, &stem).await?,
        "pdf" => vec![pipeline.process_document(&stem, &raw).await],
        _ => anyhow::bail!("unsupported file format: {}", extension),
    };

    if records.is_empty() {
        println!("{} No PDF attachments found", style("ℹ").blue());
        return Ok(());
    }

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Text => {
            for (i, record) in records.iter().enumerate() {
                print_record(i + 1, record);
            }
        }
    }

    Ok(())
}

fn print_record(ordinal: usize, record: &InvoiceRecord) {
    println!("{} Record {}", style("•").cyan(), ordinal);
    println!("  Vendor number:  {}", record.vendor_number);
    println!("  Invoice number: {}", record.invoice_number);
    println!(
        "  Invoice total:  {}",
        if record.invoice_total.is_empty() {
            "(unresolved)"
        } else {
            record.invoice_total.as_str()
        }
    );
    println!(
        "  Net amount:     {}",
        if record.invoice_net_amount.is_empty() {
            "(unresolved)"
        } else {
            record.invoice_net_amount.as_str()
        }
    );
}
