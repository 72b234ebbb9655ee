//! Customer block, read from fixed line offsets.

use crate::error::ExtractionError;
use crate::invoice::page::PageText;
use crate::models::config::LayoutConfig;
use crate::models::record::CustomerData;

/// Read the customer address block from the lines configured in `layout`.
///
/// The block has no labels, so a page that is too short for any of the
/// offsets fails the whole extraction instead of yielding partial data.
pub fn read_customer(
    page: &PageText,
    layout: &LayoutConfig,
    trim: bool,
) -> Result<CustomerData, ExtractionError> {
    let read = |field: &'static str, index: usize| -> Result<String, ExtractionError> {
        let line = page.line(index).ok_or(ExtractionError::MissingLine {
            field,
            index,
            line_count: page.line_count(),
        })?;
        Ok(if trim { line.trim().to_string() } else { line.to_string() })
    };

    Ok(CustomerData {
        name: read("customer.name", layout.customer_name_line)?,
        street: read("customer.street", layout.customer_street_line)?,
        postcode: read("customer.postcode", layout.customer_postcode_line)?,
        country: read("customer.country", layout.customer_country_line)?,
    })
}
