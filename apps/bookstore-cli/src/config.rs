//! # CLI Configuration
//!
//! Settings for the demo, loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--json`)
//! 2. Environment variables (`BOOKSTORE_*`)
//! 3. Defaults (this file)
//!
//! ## Environment Variables
//! - `BOOKSTORE_NAME`: banner text (default: "Bookstore")
//! - `BOOKSTORE_CURRENCY_SYMBOL`: symbol used in receipts (default: "$")
//! - `BOOKSTORE_OUTPUT`: `text` or `json` (default: `text`)

use std::env;
use std::str::FromStr;

use bookstore_core::CurrencyFormat;
use serde::Serialize;

/// How outcomes are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per step
    #[default]
    Text,

    /// One JSON document per step
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "BOOKSTORE_OUTPUT".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Demo configuration.
#[derive(Debug, Clone, Serialize)]
pub struct CliConfig {
    /// Shown in the welcome and goodbye banners
    pub store_name: String,

    /// Currency symbol for purchase messages
    pub currency_symbol: String,

    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            store_name: "Bookstore".to_string(),
            currency_symbol: "$".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = CliConfig::default();

        if let Some(name) = get("BOOKSTORE_NAME") {
            config.store_name = name;
        }

        if let Some(symbol) = get("BOOKSTORE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(output) = get("BOOKSTORE_OUTPUT") {
            config.output = output.parse()?;
        }

        Ok(config)
    }

    /// Applies command-line flags on top of the loaded configuration.
    pub fn apply_args<I, S>(&mut self, args: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            match arg.as_ref() {
                "--json" => self.output = OutputFormat::Json,
                "--text" => self.output = OutputFormat::Text,
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }

        Ok(())
    }

    pub fn currency(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_symbol.clone())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}
