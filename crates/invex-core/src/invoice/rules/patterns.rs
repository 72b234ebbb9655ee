//! Common regex patterns for invoice extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Labeled fields: `Label:` followed by the value up to the line break.
    // Only horizontal whitespace may follow the colon, so an empty value
    // never pulls in the next line.
    pub static ref INVOICE_DATE: Regex = Regex::new(r"Invoice date:[ \t]*(.*?)\n").unwrap();
    pub static ref INVOICE_NUMBER: Regex = Regex::new(r"Invoice number:[ \t]*(.*?)\n").unwrap();
    pub static ref PAYMENT_DUE: Regex = Regex::new(r"Payment due:[ \t]*(.*?)\n").unwrap();

    pub static ref BANK_ACCOUNT_NAME: Regex = Regex::new(r"Bank account name:[ \t]*(.*?)\n").unwrap();
    pub static ref BANK_NAME: Regex = Regex::new(r"Name of Bank:[ \t]*(.*?)\n").unwrap();
    pub static ref BANK_ACCOUNT_NUMBER: Regex = Regex::new(r"Bank account number:[ \t]*(.*?)\n").unwrap();
    pub static ref BANK_SWIFT_CODE: Regex = Regex::new(r"Bank SWIFT code:[ \t]*(.*?)\n").unwrap();
    pub static ref BANK_ADDRESS: Regex = Regex::new(r"Bank address:[ \t]*(.*?)\n").unwrap();

    // Long US date: "Feb 1, 2024"
    pub static ref DATE_MONTH_DAY_YEAR: Regex = Regex::new(
        r"\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) (\d{1,2}), (\d{4})\b"
    ).unwrap();

    // USD amounts: "USD 1,250.00", "USD $1,250.00", "$1,250.00"
    pub static ref AMOUNT_USD_OR_DOLLAR: Regex = Regex::new(
        r"(?:USD\s?\$?|\$)\s?\d+(?:,\d{3})*(?:\.\d{2})?"
    ).unwrap();

    pub static ref AMOUNT_USD_ONLY: Regex = Regex::new(
        r"USD\s?\$?\s?\d+(?:,\d{3})*(?:\.\d{2})?"
    ).unwrap();
}
