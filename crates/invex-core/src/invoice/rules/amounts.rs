//! Currency amount extraction for payment lines.

use regex::Regex;

use super::patterns::{AMOUNT_USD_ONLY, AMOUNT_USD_OR_DOLLAR};
use super::{ExtractionMatch, FieldExtractor};
use crate::models::config::MoneyPolicy;

/// Amount field extractor. Amounts are returned as printed, prefix included.
pub struct AmountExtractor {
    policy: MoneyPolicy,
}

impl AmountExtractor {
    pub fn new() -> Self {
        Self {
            policy: MoneyPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MoneyPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn pattern(&self) -> &'static Regex {
        match self.policy {
            MoneyPolicy::UsdOrDollar => &*AMOUNT_USD_OR_DOLLAR,
            MoneyPolicy::UsdOnly => &*AMOUNT_USD_ONLY,
        }
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.pattern()
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

    fn values(extractor: &AmountExtractor, text: &str) -> Vec<String> {
        extractor.extract_all(text).into_iter().map(|m| m.value).collect()
    }

    #[test]
    fn test_usd_prefix() {
        let extractor = AmountExtractor::new();
        assert_eq!(values(&extractor, "Total USD 1,250.00"), vec!["USD 1,250.00"]);
        assert_eq!(values(&extractor, "Total USD $99"), vec!["USD $99"]);
    }

    #[test]
    fn test_dollar_sign_accepted_by_default() {
        let extractor = AmountExtractor::new();
        assert_eq!(values(&extractor, "Fee $1234.56 and $7"), vec!["$1234.56", "$7"]);
    }

    #[test]
    fn test_usd_only_policy() {
        let extractor = AmountExtractor::new().with_policy(MoneyPolicy::UsdOnly);
        assert!(extractor.extract("Fee $1,234.56").is_none());
        assert_eq!(values(&extractor, "Fee USD 1,234.56"), vec!["USD 1,234.56"]);
    }

    #[test]
    fn test_plain_numbers_ignored() {
        let extractor = AmountExtractor::new();
        assert!(extractor.extract("Order 1,250.00 on Feb 1, 2024").is_none());
    }
}
