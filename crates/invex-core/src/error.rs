//! Error types for the invex-core library.

use thiserror::Error;

/// Main error type for the invex library.
#[derive(Error, Debug)]
pub enum InvexError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Invoice extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl InvexError {
    /// Whether the error means the document itself could not be processed:
    /// not a PDF, no pages, or a page that does not fit the line template.
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, InvexError::Pdf(_) | InvexError::Extraction(_))
    }
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

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to invoice field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A fixed-offset field points past the end of the rendered page.
    #[error("line {index} for {field} is out of range (page has {line_count} lines)")]
    MissingLine {
        field: &'static str,
        index: usize,
        line_count: usize,
    },

    /// The first page rendered to no text at all.
    #[error("no text found on the first page")]
    EmptyText,
}

/// Result type for the invex library.
pub type Result<T> = std::result::Result<T, InvexError>;
