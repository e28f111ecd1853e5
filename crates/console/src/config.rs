//! Console configuration, read once from the environment at startup.
//!
//! - `NEXGEN_LOG_FORMAT`: `json` (default) or `pretty`
//! - `NEXGEN_SEED_FILE`: optional JSON dataset path (`--seed` wins)
//! - AI settings: see [`nexgen_ai::config`]

use std::path::PathBuf;

use thiserror::Error;

use nexgen_ai::AiConfig;
use nexgen_observability::LogFormat;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid NEXGEN_LOG_FORMAT: {0}")]
    LogFormat(String),
}

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub log_format: LogFormat,
    pub seed_path: Option<PathBuf>,
    pub ai: AiConfig,
}

impl ConsoleConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_format = match lookup("NEXGEN_LOG_FORMAT") {
            Some(v) if !v.trim().is_empty() => v.parse().map_err(ConfigError::LogFormat)?,
            _ => LogFormat::default(),
        };
        let seed_path = lookup("NEXGEN_SEED_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            log_format,
            seed_path,
            ai: AiConfig::from_lookup(&lookup),
        })
    }
}
