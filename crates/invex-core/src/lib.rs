//! Core library for template invoice extraction.
//!
//! This crate provides:
//! - First-page PDF text rendering
//! - Field extraction for a fixed single-page invoice template: customer
//!   block from fixed line offsets, labeled invoice and bank fields, and the
//!   payment line (description, period, amount)
//! - The JSON-serializable extracted record and pipeline configuration

pub mod error;
pub mod invoice;
pub mod models;
pub mod pdf;

pub use error::{ExtractionError, InvexError, PdfError, Result};
pub use invoice::{ExtractionResult, InvoiceExtractor, InvoiceParser, PageText, TextFieldExtractor};
pub use models::config::{InvexConfig, LayoutConfig, MoneyPolicy};
pub use models::record::{BankDetails, CustomerData, ExtractedRecord, InvoiceDetails, PaymentLineItem};
pub use pdf::{PageRenderer, PdfTextRenderer};

/// Extract the invoice record from PDF bytes with the default template layout.
pub fn extract_pdf_data(data: &[u8]) -> Result<ExtractedRecord> {
    TextFieldExtractor::new().extract_from_pdf(data)
}
