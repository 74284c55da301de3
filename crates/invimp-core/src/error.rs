//! Error types for the invimp-core library.

use thiserror::Error;

/// Main error type for the invimp library.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Email container parsing error.
    #[error("email error: {0}")]
    Eml(#[from] EmlError),

    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Export serialization error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// The whole run produced zero candidate records.
    #[error("no invoice records extracted from any document")]
    NoRecords,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to email container parsing.
#[derive(Error, Debug)]
pub enum EmlError {
    /// Failed to parse the MIME structure.
    #[error("failed to parse message: {0}")]
    Parse(#[from] mailparse::MailParseError),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to writing the Munis export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// The output target could not be written.
    #[error("output target unwritable: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the invimp library.
pub type Result<T> = std::result::Result<T, ImportError>;
