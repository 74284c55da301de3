//! Configuration structures for the import pipeline.

use chrono::{Duration, Local};
use serde::{Deserialize, Serialize};

/// Main configuration for the invimp pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvimpConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Structured document-model configuration.
    pub model: ModelConfig,

    /// Static column values for the Munis export.
    pub export: ExportConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum non-whitespace characters to treat embedded text as real.
    pub min_text_chars: usize,

    /// Fraction of image-only pages above which a PDF counts as scanned.
    pub scanned_page_ratio: f64,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            min_text_chars: 30,
            scanned_page_ratio: 0.8,
        }
    }
}

/// Structured document-model endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Invoke the model at all. When false only text/table/filename
    /// signals feed the resolvers.
    pub enabled: bool,

    /// OpenAI-compatible chat completions base URL.
    pub base_url: String,

    /// Model identifier passed in the request.
    pub model: String,

    /// Sampling temperature.
    pub temperature: f64,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "http://localhost:11434/v1".to_string(),
            model: "llama3.2".to_string(),
            temperature: 0.0,
            timeout_secs: 120,
        }
    }
}

/// Caller-supplied values applied identically to every exported record.
///
/// The core never computes these from document content; they fill the
/// non-derived Munis columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub remit_number: String,
    pub invoice_date: String,
    pub invoice_due_date: String,
    pub po_fiscal_year: String,
    pub po_number: String,
    pub include_documentation: String,
    pub separate_check: String,
    pub contract_number: String,
    pub invoice_description: String,
    pub sequence_start: String,
    pub default_org: String,
    pub default_object: String,
    pub project: String,
    pub po_line_number: String,
    pub detail_description: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let today = Local::now().date_naive();
        let invoice_date = today.format("%m/%d/%Y").to_string();
        let due_date = (today + Duration::days(30)).format("%m/%d/%Y").to_string();

        // The legacy import sheet seeds org/object with the two date strings.
        Self {
            remit_number: "0".to_string(),
            invoice_date: invoice_date.clone(),
            invoice_due_date: due_date.clone(),
            po_fiscal_year: String::new(),
            po_number: String::new(),
            include_documentation: String::new(),
            separate_check: String::new(),
            contract_number: String::new(),
            invoice_description: String::new(),
            sequence_start: "1".to_string(),
            default_org: invoice_date,
            default_object: due_date,
            project: String::new(),
            po_line_number: String::new(),
            detail_description: String::new(),
        }
    }
}

impl InvimpConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_dates() {
        let config = ExportConfig::default();
        assert_eq!(config.remit_number, "0");
        assert_eq!(config.sequence_start, "1");
        assert_eq!(config.default_org, config.invoice_date);
        assert_eq!(config.default_object, config.invoice_due_date);
        // mm/dd/yyyy
        assert_eq!(config.invoice_date.len(), 10);
    }

    #[test]
    fn partial_config_deserializes_with_defaults() {
        let config: InvimpConfig =
            serde_json::from_str(r#"{"model": {"enabled": true}}"#).unwrap();
        assert!(config.model.enabled);
        assert_eq!(config.pdf.min_text_chars, 30);
    }
}
