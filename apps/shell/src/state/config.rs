//! # Shop Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`--config <path>`, else `nursery.toml` in the platform
//!    config directory)
//! 3. Environment variables (`NURSERY_*`)
//!
//! ## Config File Format
//! ```toml
//! store_name = "Paradise Nursery"
//! tagline = "Where Green Meets Serenity"
//! currency_marker = "$"
//! currency_symbol = "$"
//! catalog_path = "/srv/nursery/plants.json"
//! output = "text"   # text | json
//! ```
//!
//! ## Thread Safety
//! Read-only after initialization, so no mutex needed.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use nursery_core::{Money, PriceNormalizer, DEFAULT_CURRENCY_MARKER, DEFAULT_CURRENCY_SYMBOL};

use crate::error::{ShellError, ShellResult};

/// Name of the config file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "nursery.toml";

// =============================================================================
// Output Format
// =============================================================================

/// How responses are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// One pretty-printed JSON document per command.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ShellError::InvalidConfig(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Shop Config
// =============================================================================

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Shown in the banner.
    pub store_name: String,

    /// Shown under the store name.
    pub tagline: String,

    /// Character stripped from the front of textual prices.
    pub currency_marker: char,

    /// Prefix used when showing amounts.
    pub currency_symbol: String,

    /// Catalog JSON to load instead of the bundled one.
    pub catalog_path: Option<PathBuf>,

    /// Output format for responses.
    pub output: OutputFormat,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            store_name: "Paradise Nursery".to_string(),
            tagline: "Where Green Meets Serenity".to_string(),
            currency_marker: DEFAULT_CURRENCY_MARKER,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            catalog_path: None,
            output: OutputFormat::default(),
        }
    }
}

impl ShopConfig {
    /// Loads configuration from file, environment, and defaults.
    pub fn load(config_path: Option<PathBuf>) -> ShellResult<Self> {
        let explicit = config_path.is_some();
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading shop config from file");
                config = Self::from_file(&path)?;
            } else if explicit {
                return Err(ShellError::InvalidConfig(format!(
                    "config file not found: {}",
                    path.display()
                )));
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Reads a TOML config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> ShellResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Checks the values make sense together.
    pub fn validate(&self) -> ShellResult<()> {
        if self.store_name.trim().is_empty() {
            return Err(ShellError::InvalidConfig(
                "store_name must not be empty".into(),
            ));
        }

        if self.currency_symbol.is_empty() {
            return Err(ShellError::InvalidConfig(
                "currency_symbol must not be empty".into(),
            ));
        }

        // These would be swallowed by the decimal parser or by trimming
        let marker = self.currency_marker;
        if marker.is_whitespace() || marker.is_ascii_digit() || matches!(marker, '.' | '-' | '+') {
            return Err(ShellError::InvalidConfig(format!(
                "currency_marker '{}' cannot prefix a price",
                marker
            )));
        }

        Ok(())
    }

    /// Applies `NURSERY_*` overrides read through `lookup`.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("NURSERY_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(marker) = lookup("NURSERY_CURRENCY_MARKER") {
            let mut chars = marker.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => self.currency_marker = c,
                _ => warn!(marker = %marker, "NURSERY_CURRENCY_MARKER must be one character"),
            }
        }

        if let Some(symbol) = lookup("NURSERY_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(path) = lookup("NURSERY_CATALOG") {
            debug!(path = %path, "Overriding catalog path from environment");
            self.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(output) = lookup("NURSERY_OUTPUT") {
            match output.parse() {
                Ok(parsed) => self.output = parsed,
                Err(_) => warn!(output = %output, "Unknown output format in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "paradise", "nursery")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Price normalizer using the configured marker.
    pub fn normalizer(&self) -> PriceNormalizer {
        PriceNormalizer::new(self.currency_marker)
    }

    /// Formats money with the configured symbol.
    pub fn format_money(&self, amount: Money) -> String {
        amount.display_with(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ShopConfig::default();
        assert_eq!(config.store_name, "Paradise Nursery");
        assert_eq!(config.currency_marker, '$');
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ShopConfig = toml::from_str(
            r#"
            currency_marker = "€"
            currency_symbol = "€"
            output = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.currency_marker, '€');
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.store_name, "Paradise Nursery");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ShopConfig::default();
        config.apply_overrides(env(&[
            ("NURSERY_STORE_NAME", "Fern Gully"),
            ("NURSERY_CURRENCY_MARKER", "£"),
            ("NURSERY_CATALOG", "/tmp/plants.json"),
            ("NURSERY_OUTPUT", "JSON"),
        ]));

        assert_eq!(config.store_name, "Fern Gully");
        assert_eq!(config.currency_marker, '£');
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/plants.json")));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let mut config = ShopConfig::default();
        config.apply_overrides(env(&[
            ("NURSERY_CURRENCY_MARKER", "USD"),
            ("NURSERY_OUTPUT", "xml"),
        ]));
        assert_eq!(config.currency_marker, '$');
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_validation() {
        let mut config = ShopConfig::default();
        config.currency_marker = '7';
        assert!(config.validate().is_err());

        config.currency_marker = '$';
        config.store_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("nursery-shell-does-not-exist.toml");
        assert!(matches!(
            ShopConfig::load(Some(path)),
            Err(ShellError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_format_money() {
        let mut config = ShopConfig::default();
        assert_eq!(config.format_money(Money::from_cents(3550)), "$35.50");
        config.currency_symbol = "€".to_string();
        assert_eq!(config.format_money(Money::from_cents(3550)), "€35.50");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
