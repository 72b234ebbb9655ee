//! Label-anchored field extraction.

use regex::Regex;
use tracing::trace;

use super::patterns::{
    BANK_ACCOUNT_NAME, BANK_ACCOUNT_NUMBER, BANK_ADDRESS, BANK_NAME, BANK_SWIFT_CODE,
    INVOICE_DATE, INVOICE_NUMBER, PAYMENT_DUE,
};
use super::{ExtractionMatch, FieldExtractor};

/// A label printed on the invoice template in front of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    InvoiceDate,
    InvoiceNumber,
    PaymentDue,
    BankAccountName,
    BankName,
    BankAccountNumber,
    BankSwiftCode,
    BankAddress,
}

impl Label {
    /// All labels, in record order.
    pub const ALL: [Label; 8] = [
        Label::InvoiceDate,
        Label::InvoiceNumber,
        Label::PaymentDue,
        Label::BankAccountName,
        Label::BankName,
        Label::BankAccountNumber,
        Label::BankSwiftCode,
        Label::BankAddress,
    ];

    /// The label as printed, including the colon.
    pub fn text(self) -> &'static str {
        match self {
            Label::InvoiceDate => "Invoice date:",
            Label::InvoiceNumber => "Invoice number:",
            Label::PaymentDue => "Payment due:",
            Label::BankAccountName => "Bank account name:",
            Label::BankName => "Name of Bank:",
            Label::BankAccountNumber => "Bank account number:",
            Label::BankSwiftCode => "Bank SWIFT code:",
            Label::BankAddress => "Bank address:",
        }
    }

    /// Name of the record field the label fills.
    pub fn field_name(self) -> &'static str {
        match self {
            Label::InvoiceDate => "date",
            Label::InvoiceNumber => "id",
            Label::PaymentDue => "payment_due",
            Label::BankAccountName => "bank_account_name",
            Label::BankName => "bank_name",
            Label::BankAccountNumber => "account_number",
            Label::BankSwiftCode => "swift_code",
            Label::BankAddress => "bank_address",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Label::InvoiceDate => &*INVOICE_DATE,
            Label::InvoiceNumber => &*INVOICE_NUMBER,
            Label::PaymentDue => &*PAYMENT_DUE,
            Label::BankAccountName => &*BANK_ACCOUNT_NAME,
            Label::BankName => &*BANK_NAME,
            Label::BankAccountNumber => &*BANK_ACCOUNT_NUMBER,
            Label::BankSwiftCode => &*BANK_SWIFT_CODE,
            Label::BankAddress => &*BANK_ADDRESS,
        }
    }
}

/// Extracts the value following one label.
pub struct LabeledFieldExtractor {
    label: Label,
    trim: bool,
}

impl LabeledFieldExtractor {
    pub fn new(label: Label) -> Self {
        Self { label, trim: true }
    }

    /// Keep surrounding whitespace of the captured value.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn label(&self) -> Label {
        self.label
    }
}

impl FieldExtractor for LabeledFieldExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.label
            .pattern()
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|value| {
                let raw = value.as_str();
                let extracted = if self.trim { raw.trim() } else { raw };
                trace!("{} -> {:?}", self.label.text(), extracted);
                ExtractionMatch::new(extracted.to_string(), raw)
                    .with_position(value.start(), value.end())
            })
            .collect()
    }
}

/// Value following `label` in `text`, trimmed; `None` when the label is absent.
pub fn extract_labeled(text: &str, label: Label) -> Option<String> {
    LabeledFieldExtractor::new(label).extract(text).map(|m| m.value)
}
