//! Data models for the import pipeline.

pub mod config;
pub mod record;

pub use config::{ExportConfig, InvimpConfig, ModelConfig, PdfConfig};
pub use record::{InvoiceRecord, RawSignals, StructuredFields, Table};
