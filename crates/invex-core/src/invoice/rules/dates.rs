//! Date extraction for payment lines.

use super::patterns::DATE_MONTH_DAY_YEAR;
use super::{ExtractionMatch, FieldExtractor};

/// Finds `Mon D, YYYY` dates. Values are returned as printed.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DATE_MONTH_DAY_YEAR
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_dates_in_order() {
        let extractor = DateExtractor::new();
        let dates: Vec<_> = extractor
            .extract_all("Hosting Feb 1, 2024 Feb 29, 2024 USD 10.00")
            .into_iter()
            .map(|m| m.value)
            .collect();

        assert_eq!(dates, vec!["Feb 1, 2024", "Feb 29, 2024"]);
    }

    #[test]
    fn test_date_position() {
        let extractor = DateExtractor::new();
        let found = extractor.extract("From Dec 31, 2023").unwrap();
        assert_eq!(found.position, Some((5, 17)));
    }

    #[test]
    fn test_rejects_other_formats() {
        let extractor = DateExtractor::new();
        assert!(extractor.extract("2024-02-01").is_none());
        assert!(extractor.extract("February 1, 2024").is_none());
        assert!(extractor.extract("feb 1, 2024").is_none());
        assert!(extractor.extract("Feb 1 2024").is_none());
    }
}
