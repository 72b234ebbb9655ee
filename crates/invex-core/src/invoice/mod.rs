//! Invoice field extraction module.

pub mod page;
mod parser;
pub mod rules;

pub use page::PageText;
pub use parser::{ExtractionResult, InvoiceParser, TextFieldExtractor};

use crate::error::{ExtractionError, InvexError};
use crate::models::record::ExtractedRecord;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for invoice field extractors.
pub trait InvoiceExtractor {
    /// Extract invoice data from PDF bytes.
    fn extract_from_pdf(&self, data: &[u8]) -> std::result::Result<ExtractedRecord, InvexError>;

    /// Extract invoice data from rendered first-page text.
    fn extract_from_text(&self, text: &str) -> Result<ExtractedRecord>;
}
