//! Binary configuration, read from the environment

use std::str::FromStr;
use thiserror::Error;

pub const LOG_FORMAT_VAR: &str = "QUESTIONING_LOG_FORMAT";
pub const TRANSITION_LOG_VAR: &str = "QUESTIONING_TRANSITION_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown value {value:?} for {name} (expected one of: {expected})")]
    UnknownValue {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Output format of diagnostic logs on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::UnknownValue {
                name: LOG_FORMAT_VAR,
                value: s.to_string(),
                expected: "compact, json",
            }),
        }
    }
}

/// Where transition events go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionLogMode {
    /// Structured `tracing` records
    #[default]
    Tracing,
    /// Newline-delimited JSON on stderr
    Json,
    Off,
}

impl FromStr for TransitionLogMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tracing" => Ok(TransitionLogMode::Tracing),
            "json" => Ok(TransitionLogMode::Json),
            "off" | "none" => Ok(TransitionLogMode::Off),
            _ => Err(ConfigError::UnknownValue {
                name: TRANSITION_LOG_VAR,
                value: s.to_string(),
                expected: "tracing, json, off",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CliConfig {
    pub log_format: LogFormat,
    pub transition_log: TransitionLogMode,
}

impl CliConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Unset or unparseable values fall back
    /// to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_format: lookup(LOG_FORMAT_VAR)
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            transition_log: lookup(TRANSITION_LOG_VAR)
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }
}
