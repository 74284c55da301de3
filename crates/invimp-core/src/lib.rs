//! Core library for the Munis invoice import pipeline.
//!
//! This crate provides:
//! - Email container handling (PDF attachments out of .eml files)
//! - PDF text extraction with a structural scanned-document check
//! - Field resolution: ordered fallback chains over independent signals
//! - Record deduplication on the (vendor, invoice) business key
//! - Munis AP import serialization (two fixed-schema rows per invoice)

pub mod dedup;
pub mod eml;
pub mod error;
pub mod export;
pub mod models;
pub mod pdf;
pub mod pipeline;
pub mod resolve;
pub mod signals;

pub use dedup::dedup_records;
pub use error::{EmlError, ExportError, ImportError, PdfError, Result};
pub use export::{write_munis, write_munis_file};
pub use models::config::{ExportConfig, InvimpConfig, ModelConfig, PdfConfig};
pub use models::record::{InvoiceRecord, RawSignals, StructuredFields, Table};
pub use pipeline::Pipeline;
pub use resolve::{FinancialDetails, assemble_record, resolve_chain, resolve_financial};
pub use signals::{ChatModelClient, ModelExtractor, NoopTables, NullModel, TableExtractor};
