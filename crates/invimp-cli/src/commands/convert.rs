//! Convert command - fold a directory of .eml files into one Munis CSV.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use invimp_core::{ImportError, NoopTables, Pipeline, dedup_records, write_munis_file};

use super::{build_model, load_config};

/// Arguments for the convert command.
#[derive(Args)]
pub struct ConvertArgs {
    /// Directory with .eml files (searched recursively)
    #[arg(short, long, default_value = ".")]
    folder: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "munis_import.csv")]
    output: PathBuf,

    /// Override the remit number column
    #[arg(long)]
    remit_number: Option<String>,

    /// Override the invoice date column (mm/dd/yyyy)
    #[arg(long)]
    invoice_date: Option<String>,

    /// Override the invoice due date column (mm/dd/yyyy)
    #[arg(long)]
    invoice_due_date: Option<String>,

    #[arg(long)]
    po_fiscal_year: Option<String>,

    #[arg(long)]
    po_number: Option<String>,

    #[arg(long)]
    include_documentation: Option<String>,

    #[arg(long)]
    separate_check: Option<String>,

    #[arg(long)]
    contract_number: Option<String>,

    #[arg(long)]
    invoice_description: Option<String>,

    #[arg(long)]
    sequence_start: Option<String>,

    #[arg(long)]
    default_org: Option<String>,

    #[arg(long)]
    default_object: Option<String>,

    #[arg(long)]
    project: Option<String>,

    #[arg(long)]
    po_line_number: Option<String>,

    #[arg(long)]
    detail_description: Option<String>,
}

pub async fn run(args: ConvertArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    apply_overrides(&mut config.export, &args);

    if !args.folder.is_dir() {
        anyhow::bail!("folder not found: {}", args.folder.display());
    }

    // Discover messages, deterministic order; extension match is
    // case-insensitive
    let pattern = format!("{}/**/*", args.folder.display());
    let mut files: Vec<PathBuf> = glob(&pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("eml"))
        })
        .collect();
    files.sort();

    if files.is_empty() {
        println!("{} No .eml files in {}", style("ℹ").blue(), args.folder.display());
    } else {
        println!("{} Found {} .eml files", style("ℹ").blue(), files.len());
        for path in &files {
            println!("   {}", path.display());
        }
    }

    let model = build_model(&config);
    let pipeline = Pipeline::new(&config, model.as_ref(), &NoopTables);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} messages")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut records = Vec::new();
    let mut failed = 0usize;

    for path in &files {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("message")
            .to_string();

        let raw = match fs::read(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(message = %path.display(), error = %e, "skipping unreadable message");
                failed += 1;
                pb.inc(1);
                continue;
            }
        };

        match pipeline.process_message(&raw, &stem).await {
            Ok(found) => {
                debug!(message = %path.display(), records = found.len(), "message done");
                println!(
                    "  {} {} PDF attachment(s) in {}",
                    style("→").dim(),
                    found.len(),
                    path.display()
                );
                records.extend(found);
            }
            Err(e) => {
                warn!(message = %path.display(), error = %e, "skipping unparseable message");
                failed += 1;
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let unique = dedup_records(records);
    if unique.is_empty() {
        return Err(ImportError::NoRecords.into());
    }

    write_munis_file(&args.output, &unique, &config.export)?;

    println!(
        "{} Wrote {} invoices to {} in {:?}",
        style("✓").green(),
        unique.len(),
        args.output.display(),
        start.elapsed()
    );
    if failed > 0 {
        println!("{} {} message(s) skipped", style("!").yellow(), failed);
    }

    Ok(())
}

fn apply_overrides(export: &mut invimp_core::ExportConfig, args: &ConvertArgs) {
    let overrides = [
        (&args.remit_number, &mut export.remit_number),
        (&args.invoice_date, &mut export.invoice_date),
        (&args.invoice_due_date, &mut export.invoice_due_date),
        (&args.po_fiscal_year, &mut export.po_fiscal_year),
        (&args.po_number, &mut export.po_number),
        (&args.include_documentation, &mut export.include_documentation),
        (&args.separate_check, &mut export.separate_check),
        (&args.contract_number, &mut export.contract_number),
        (&args.invoice_description, &mut export.invoice_description),
        (&args.sequence_start, &mut export.sequence_start),
        (&args.default_org, &mut export.default_org),
        (&args.default_object, &mut export.default_object),
        (&args.project, &mut export.project),
        (&args.po_line_number, &mut export.po_line_number),
        (&args.detail_description, &mut export.detail_description),
    ];

    for (value, target) in overrides {
        if let Some(value) = value {
            *target = value.clone();
        }
    }
}
