//! Output formats for extracted records.

use invex_core::ExtractedRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (one header row, one data row)
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_record(record: &ExtractedRecord, format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &ExtractedRecord) -> anyhow::Result<String> {
    let columns = record.to_columns();
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(columns.iter().map(|(name, _)| *name))?;
    wtr.write_record(columns.iter().map(|(_, value)| value.as_str()))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ExtractedRecord) -> String {
    let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    let details = &record.invoice_details;
    let bank = &record.recipient_bank_details;

    let mut output = String::new();

    output.push_str(&format!("Invoice: {}\n", show(&details.id)));
    output.push_str(&format!("Date: {}\n", show(&details.date)));
    output.push_str(&format!("Payment due: {}\n", show(&details.payment_due)));
    output.push('\n');

    output.push_str("Customer:\n");
    output.push_str(&format!("  {}\n", record.customer.name));
    output.push_str(&format!("  {}\n", record.customer.street));
    output.push_str(&format!("  {}\n", record.customer.postcode));
    output.push_str(&format!("  {}\n", record.customer.country));
    output.push('\n');

    if let Some(payment) = details.payment() {
        output.push_str("Payment:\n");
        output.push_str(&format!("  {}\n", payment.description));
        if !payment.from.is_empty() || !payment.until.is_empty() {
            output.push_str(&format!("  Period: {} - {}\n", payment.from, payment.until));
        }
        output.push_str(&format!("  Amount: {}\n", payment.amount));
        output.push('\n');
    }

    output.push_str("Bank:\n");
    output.push_str(&format!("  Account name:   {}\n", show(&bank.bank_account_name)));
    output.push_str(&format!("  Bank:           {}\n", show(&bank.bank_name)));
    output.push_str(&format!("  Account number: {}\n", show(&bank.account_number)));
    output.push_str(&format!("  SWIFT:          {}\n", show(&bank.swift_code)));
    output.push_str(&format!("  Address:        {}\n", show(&bank.bank_address)));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ExtractedRecord {
        let mut record = ExtractedRecord::default();
        record.customer.name = "Jane Doe".to_string();
        record.invoice_details.id = Some("INV-7".to_string());
        record.invoice_details.payments[0].amount = "$1,000.00".to_string();
        record
    }

    #[test]
    fn test_csv_quotes_commas() {
        let csv = format_record(&record(), OutputFormat::Csv, false).unwrap();
        let mut lines = csv.lines();

        assert!(lines.next().unwrap().starts_with("customer_name,customer_street"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("Jane Doe,"));
        assert!(row.contains("\"$1,000.00\""));
    }

    #[test]
    fn test_text_marks_missing_fields() {
        let text = format_record(&record(), OutputFormat::Text, false).unwrap();
        assert!(text.starts_with("Invoice: INV-7\nDate: -\n"));
        assert!(text.contains("SWIFT:          -"));
        assert!(!text.contains("Period:"));
    }

    #[test]
    fn test_json_compact_and_pretty() {
        let compact = format_record(&record(), OutputFormat::Json, false).unwrap();
        let pretty = format_record(&record(), OutputFormat::Json, true).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&compact).unwrap(),
            serde_json::from_str::<serde_json::Value>(&pretty).unwrap()
        );
    }
}
