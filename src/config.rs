//! Configuration management for recipient-check.
//!
//! Everything is optional and read from environment variables, with a `.env`
//! file picked up if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Json,

    /// `OK <value>` or `ERR <message>` per line
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(format!("Must be json or text, got: {}", other)),
        }
    }
}

/// Configuration for recipient-check.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether phone numbers outside the UK are accepted (default: true)
    pub allow_international_numbers: bool,

    /// Report format (default: json)
    pub output_format: OutputFormat,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ALLOW_INTERNATIONAL_NUMBERS`: `true`/`false` (default: true)
    /// - `OUTPUT_FORMAT`: `json` or `text` (default: json)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout, which carries the reports
        let _ = dotenvy::dotenv();

        let allow_international_numbers =
            Self::parse_env_bool("ALLOW_INTERNATIONAL_NUMBERS", true)?;

        let output_format = match env::var("OUTPUT_FORMAT") {
            Ok(val) => val
                .parse::<OutputFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "OUTPUT_FORMAT".to_string(),
                    reason,
                })?,
            Err(_) => OutputFormat::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            allow_international_numbers,
            output_format,
            log_level,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            allow_international_numbers: true,
            output_format: OutputFormat::Json,
            log_level: "error".to_string(),
        }
    }
}
