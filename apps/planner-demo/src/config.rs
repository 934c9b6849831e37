//! Configuration for planner-demo.
//!
//! All environment variables are read once at startup; invalid values fail
//! fast before any record is created.

use std::env;

use thiserror::Error;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// How records are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rust debug form, every field shown.
    Debug,
    Json,
}

impl OutputFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration error.
#[derive(Debug, Error)]
#[error("configuration error for {field}: {message}")]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// LOG_FORMAT (default: pretty)
    pub log_format: LogFormat,
    /// OUTPUT_FORMAT (default: debug)
    pub output_format: OutputFormat,
}

impl Config {
    /// Load and validate configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = LogFormat::parse(&lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".into()));

        let output_format = match lookup("OUTPUT_FORMAT").filter(|s| !s.is_empty()) {
            None => OutputFormat::Debug,
            Some(raw) => OutputFormat::parse(&raw).ok_or_else(|| ConfigError {
                field: "OUTPUT_FORMAT",
                message: format!("expected 'debug' or 'json', got '{}'", raw),
            })?,
        };

        Ok(Self {
            log_format,
            output_format,
        })
    }
}
