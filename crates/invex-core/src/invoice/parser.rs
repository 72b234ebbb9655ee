//! Template invoice parser combining fixed offsets and labeled patterns.

use std::time::Instant;

use tracing::{debug, info, trace};

use crate::error::{ExtractionError, InvexError};
use crate::models::config::{InvexConfig, LayoutConfig, MoneyPolicy};
use crate::models::record::{BankDetails, ExtractedRecord, InvoiceDetails};
use crate::pdf::{PageRenderer, PdfTextRenderer};

use super::page::PageText;
use super::rules::{parse_payment_line, read_customer, FieldExtractor, Label, LabeledFieldExtractor};
use super::{InvoiceExtractor, Result};

/// Result of invoice extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted invoice data.
    pub record: ExtractedRecord,
    /// Number of lines on the normalized page.
    pub line_count: usize,
    /// Record fields whose label was not found, in record order.
    pub missing_fields: Vec<&'static str>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for invoice parsing.
pub trait InvoiceParser {
    /// Parse invoice from rendered first-page text.
    fn parse(&self, text: &str) -> Result<ExtractionResult>;
}

/// Extracts the invoice record from a single-page template invoice.
///
/// Every reader runs independently against the same normalized page; none
/// depends on another's output.
pub struct TextFieldExtractor {
    layout: LayoutConfig,
    money_policy: MoneyPolicy,
    trim_values: bool,
    renderer: Box<dyn PageRenderer + Send + Sync>,
}

impl TextFieldExtractor {
    /// Create an extractor for the default template layout.
    pub fn new() -> Self {
        Self {
            layout: LayoutConfig::default(),
            money_policy: MoneyPolicy::default(),
            trim_values: true,
            renderer: Box::new(PdfTextRenderer::new()),
        }
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &InvexConfig) -> Self {
        Self::new()
            .with_layout(config.layout.clone())
            .with_money_policy(config.extraction.money_policy)
            .with_trim_values(config.extraction.trim_values)
    }

    /// Set the template line layout.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Set the currency policy for the payment amount.
    pub fn with_money_policy(mut self, policy: MoneyPolicy) -> Self {
        self.money_policy = policy;
        self
    }

    /// Set whether extracted values are trimmed.
    pub fn with_trim_values(mut self, trim: bool) -> Self {
        self.trim_values = trim;
        self
    }

    /// Replace the PDF renderer.
    pub fn with_renderer(mut self, renderer: impl PageRenderer + Send + Sync + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Render the first page of `data` and normalize it into lines.
    pub fn render_page(&self, data: &[u8]) -> std::result::Result<PageText, InvexError> {
        let rendered = self.renderer.render_first_page(data)?;
        debug!(
            "{} rendered first page to {} chars",
            self.renderer.backend_name(),
            rendered.len()
        );
        Ok(PageText::new(&rendered, self.layout.skip_blank_lines))
    }

    /// Extract from PDF bytes, keeping diagnostics.
    pub fn parse_pdf(&self, data: &[u8]) -> std::result::Result<ExtractionResult, InvexError> {
        let start = Instant::now();
        let page = self.render_page(data)?;
        let mut result = self.parse_page(&page)?;
        result.processing_time_ms = start.elapsed().as_millis() as u64;
        Ok(result)
    }

    fn parse_page(&self, page: &PageText) -> Result<ExtractionResult> {
        let start = Instant::now();

        if page.is_empty() {
            return Err(ExtractionError::EmptyText);
        }
        debug!("Page has {} lines", page.line_count());

        let customer = read_customer(page, &self.layout, self.trim_values)?;

        let payment_line = page
            .line(self.layout.payment_line)
            .ok_or(ExtractionError::MissingLine {
                field: "invoice_details.payments",
                index: self.layout.payment_line,
                line_count: page.line_count(),
            })?;
        let payment = parse_payment_line(payment_line, self.money_policy);

        let mut missing_fields = Vec::new();
        let mut labeled = |label: Label| {
            let extractor = LabeledFieldExtractor::new(label).with_trim(self.trim_values);
            match extractor.extract(page.text()) {
                Some(found) => {
                    trace!(
                        "{} matched {:?} at {:?}",
                        extractor.label().field_name(),
                        found.source,
                        found.position
                    );
                    Some(found.value)
                }
                None => {
                    debug!("Label {:?} not found", extractor.label().text());
                    missing_fields.push(extractor.label().field_name());
                    None
                }
            }
        };

        let invoice_details = InvoiceDetails {
            date: labeled(Label::InvoiceDate),
            id: labeled(Label::InvoiceNumber),
            payment_due: labeled(Label::PaymentDue),
            payments: vec![payment],
        };

        let recipient_bank_details = BankDetails {
            bank_account_name: labeled(Label::BankAccountName),
            bank_name: labeled(Label::BankName),
            account_number: labeled(Label::BankAccountNumber),
            swift_code: labeled(Label::BankSwiftCode),
            bank_address: labeled(Label::BankAddress),
        };

        let processing_time_ms = start.elapsed().as_millis() as u64;
        info!(
            "Extracted invoice {:?} ({} labeled fields missing) in {}ms",
            invoice_details.id.as_deref().unwrap_or("<unknown>"),
            missing_fields.len(),
            processing_time_ms
        );

        Ok(ExtractionResult {
            record: ExtractedRecord {
                customer,
                invoice_details,
                recipient_bank_details,
            },
            line_count: page.line_count(),
            missing_fields,
            processing_time_ms,
        })
    }
}

impl Default for TextFieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceParser for TextFieldExtractor {
    fn parse(&self, text: &str) -> Result<ExtractionResult> {
        let page = PageText::new(text, self.layout.skip_blank_lines);
        self.parse_page(&page)
    }
}

impl InvoiceExtractor for TextFieldExtractor {
    fn extract_from_pdf(&self, data: &[u8]) -> std::result::Result<ExtractedRecord, InvexError> {
        self.parse_pdf(data).map(|r| r.record)
    }

    fn extract_from_text(&self, text: &str) -> Result<ExtractedRecord> {
        self.parse(text).map(|r| r.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;
    use pretty_assertions::assert_eq;

    const PAGE: &str = "\
ACME Cloud Services Inc.
500 Market Street
San Francisco, CA 94105
billing@acme.example
INVOICE
Bill to:
Jane Doe
42 Wallaby Way
2000 Sydney
Australia
Invoice date: Mar 1, 2024
Invoice number: INV-2024-0042
Payment due: Mar 31, 2024
Description From Until Amount
Cloud hosting Feb 1, 2024 Feb 29, 2024 USD 1,250.00
Bank account name: ACME Cloud Services Inc.
Name of Bank: First Example Bank
Bank account number: 123456789
Bank SWIFT code: FEXBUS33
Bank address: 1 Finance Plaza, New York, NY 10001";

    struct FixedRenderer(&'static str);

    impl PageRenderer for FixedRenderer {
        fn render_first_page(&self, _data: &[u8]) -> crate::pdf::Result<String> {
            Ok(self.0.to_string())
        }

        fn backend_name(&self) -> &str {
            "fixed"
        }
    }

    struct FailingRenderer;

    impl PageRenderer for FailingRenderer {
        fn render_first_page(&self, _data: &[u8]) -> crate::pdf::Result<String> {
            Err(PdfError::NoPages)
        }

        fn backend_name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_parse_template_page() {
        let result = TextFieldExtractor::new().parse(PAGE).unwrap();
        let record = result.record;

        assert_eq!(record.customer.name, "Jane Doe");
        assert_eq!(record.invoice_details.id.as_deref(), Some("INV-2024-0042"));
        assert_eq!(record.invoice_details.payments.len(), 1);
        assert_eq!(record.invoice_details.payments[0].description, "Cloud hosting");
        assert_eq!(
            record.recipient_bank_details.bank_address.as_deref(),
            Some("1 Finance Plaza, New York, NY 10001")
        );
        assert!(result.missing_fields.is_empty());
        assert_eq!(result.line_count, 20);
    }

    #[test]
    fn test_missing_label_reported() {
        let page = PAGE.replace("Bank SWIFT code: FEXBUS33\n", "");
        let result = TextFieldExtractor::new().parse(&page).unwrap();

        assert_eq!(result.record.recipient_bank_details.swift_code, None);
        assert_eq!(result.missing_fields, vec!["swift_code"]);
    }

    #[test]
    fn test_page_without_payment_line() {
        let page: Vec<&str> = PAGE.lines().take(12).collect();
        let err = TextFieldExtractor::new().parse(&page.join("\n")).unwrap_err();

        assert!(matches!(
            err,
            ExtractionError::MissingLine { index: 14, line_count: 12, .. }
        ));
    }

    #[test]
    fn test_blank_page() {
        let err = TextFieldExtractor::new().parse("\n  \n").unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyText));
    }

    #[test]
    fn test_extract_from_pdf_uses_renderer() {
        let extractor = TextFieldExtractor::new().with_renderer(FixedRenderer(PAGE));
        let record = extractor.extract_from_pdf(b"%PDF-stub").unwrap();
        assert_eq!(record.customer.country, "Australia");

        let failing = TextFieldExtractor::new().with_renderer(FailingRenderer);
        let err = failing.extract_from_pdf(b"%PDF-stub").unwrap_err();
        assert!(err.is_malformed_document());
    }

    #[test]
    fn test_from_config() {
        let mut config = InvexConfig::default();
        config.extraction.money_policy = MoneyPolicy::UsdOnly;
        config.layout.payment_line = 13;

        let extractor = TextFieldExtractor::from_config(&config);
        assert_eq!(extractor.layout().payment_line, 13);

        let payment = extractor.parse(PAGE).unwrap().record.invoice_details.payments[0].clone();
        assert_eq!(payment.description, "Description From Until Amount");
        assert_eq!(payment.amount, "");
    }
}
