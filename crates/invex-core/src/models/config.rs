//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{InvexError, Result};

/// Main configuration for invex.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvexConfig {
    /// Line layout of the invoice template.
    pub layout: LayoutConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Remote document fetching.
    pub fetch: FetchConfig,
}

/// Fixed line offsets of the invoice template (0-indexed, counted on the
/// normalized first-page text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub customer_name_line: usize,
    pub customer_street_line: usize,
    pub customer_postcode_line: usize,
    pub customer_country_line: usize,

    /// Line holding the single payment line item.
    pub payment_line: usize,

    /// Drop blank lines before indexing.
    pub skip_blank_lines: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            customer_name_line: 6,
            customer_street_line: 7,
            customer_postcode_line: 8,
            customer_country_line: 9,
            payment_line: 14,
            skip_blank_lines: true,
        }
    }
}

impl LayoutConfig {
    /// Number of lines a page needs for every fixed offset to resolve.
    pub fn required_lines(&self) -> usize {
        [
            self.customer_name_line,
            self.customer_street_line,
            self.customer_postcode_line,
            self.customer_country_line,
            self.payment_line,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }
}

/// Which currency prefixes count as a money amount on the payment line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoneyPolicy {
    /// `USD 1,250.00`, `USD $1,250.00` or `$1,250.00`.
    #[default]
    UsdOrDollar,
    /// Only amounts prefixed with `USD`.
    UsdOnly,
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Currency prefix policy for the payment amount.
    pub money_policy: MoneyPolicy,

    /// Trim surrounding whitespace from extracted values.
    pub trim_values: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            money_policy: MoneyPolicy::default(),
            trim_values: true,
        }
    }
}

/// Settings for downloading documents given as URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Refuse responses larger than this many bytes.
    pub max_bytes: u64,

    /// User-Agent header sent with requests.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_bytes: 20 * 1024 * 1024,
            user_agent: concat!("invex/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl InvexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the extractor cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.timeout_secs == 0 {
            return Err(InvexError::Config("fetch.timeout_secs must be positive".to_string()));
        }
        if self.fetch.max_bytes == 0 {
            return Err(InvexError::Config("fetch.max_bytes must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_layout_matches_template() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.customer_name_line, 6);
        assert_eq!(layout.customer_country_line, 9);
        assert_eq!(layout.payment_line, 14);
        assert_eq!(layout.required_lines(), 15);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: InvexConfig =
            serde_json::from_str(r#"{"extraction": {"money_policy": "usd_only"}}"#).unwrap();

        assert_eq!(config.extraction.money_policy, MoneyPolicy::UsdOnly);
        assert!(config.extraction.trim_values);
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = InvexConfig::default();
        config.layout.payment_line = 15;
        config.save(&path).unwrap();

        let loaded = InvexConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = InvexConfig::default();
        config.fetch.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(InvexError::Config(_))));
    }
}
