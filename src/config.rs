//! Environment-derived configuration
//!
//! A missing credential is not a startup failure: the app still launches and
//! every expansion attempt reports the configuration fault instead.

use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_THINKING_BUDGET: u32 = 4000;
pub const DEFAULT_LOG_FILTER: &str = "avatargen=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    /// Override for the Gemini endpoint host (gateways, local proxies)
    pub base_url: Option<String>,
    pub model: String,
    pub thinking_budget: u32,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: DEFAULT_MODEL.to_string(),
            thinking_budget: DEFAULT_THINKING_BUDGET,
            log_file: std::env::temp_dir().join("avatargen.log"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source; tests pass a closure over a map
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let thinking_budget = match non_empty("AVATARGEN_THINKING_BUDGET") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: "AVATARGEN_THINKING_BUDGET",
                    value,
                })?,
            None => defaults.thinking_budget,
        };

        Ok(Self {
            api_key: non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")),
            base_url: non_empty("AVATARGEN_BASE_URL"),
            model: non_empty("AVATARGEN_MODEL").unwrap_or(defaults.model),
            thinking_budget,
            log_file: non_empty("AVATARGEN_LOG_FILE").map_or(defaults.log_file, PathBuf::from),
        })
    }
}
