//! Extracted invoice record.
//!
//! The serialized shape is the output contract of the extractor: regex
//! fields that did not match serialize as `null`, payment line parts that
//! were not found serialize as empty strings.

use serde::{Deserialize, Serialize};

/// Everything extracted from one invoice page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// Customer address block.
    pub customer: CustomerData,

    /// Invoice identifiers and the payment line.
    pub invoice_details: InvoiceDetails,

    /// Bank details of the payment recipient.
    pub recipient_bank_details: BankDetails,
}

/// Customer address block, read from fixed line offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerData {
    pub name: String,
    pub street: String,
    pub postcode: String,
    pub country: String,
}

/// Invoice identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDetails {
    /// Invoice date as printed.
    pub date: Option<String>,

    /// Invoice number.
    pub id: Option<String>,

    /// Payment due date as printed.
    pub payment_due: Option<String>,

    /// Payment line items. The template carries a single line, so this
    /// always holds exactly one element.
    pub payments: Vec<PaymentLineItem>,
}

impl Default for InvoiceDetails {
    fn default() -> Self {
        Self {
            date: None,
            id: None,
            payment_due: None,
            payments: vec![PaymentLineItem::default()],
        }
    }
}

impl InvoiceDetails {
    /// The payment line item.
    pub fn payment(&self) -> Option<&PaymentLineItem> {
        self.payments.first()
    }
}

/// One payment line: description, billing period and amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLineItem {
    pub description: String,
    pub from: String,
    pub until: String,
    pub amount: String,
}

/// Recipient bank details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    pub bank_account_name: Option<String>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub swift_code: Option<String>,
    pub bank_address: Option<String>,
}

impl ExtractedRecord {
    /// Flatten the record into `(column, value)` pairs for tabular output.
    /// Missing values become empty strings.
    pub fn to_columns(&self) -> Vec<(&'static str, String)> {
        let payment = self.invoice_details.payment().cloned().unwrap_or_default();
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();

        vec![
            ("customer_name", self.customer.name.clone()),
            ("customer_street", self.customer.street.clone()),
            ("customer_postcode", self.customer.postcode.clone()),
            ("customer_country", self.customer.country.clone()),
            ("invoice_date", opt(&self.invoice_details.date)),
            ("invoice_id", opt(&self.invoice_details.id)),
            ("payment_due", opt(&self.invoice_details.payment_due)),
            ("payment_description", payment.description),
            ("payment_from", payment.from),
            ("payment_until", payment.until),
            ("payment_amount", payment.amount),
            ("bank_account_name", opt(&self.recipient_bank_details.bank_account_name)),
            ("bank_name", opt(&self.recipient_bank_details.bank_name)),
            ("account_number", opt(&self.recipient_bank_details.account_number)),
            ("swift_code", opt(&self.recipient_bank_details.swift_code)),
            ("bank_address", opt(&self.recipient_bank_details.bank_address)),
        ]
    }
}
