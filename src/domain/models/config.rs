use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::error::LoggingError;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Minimum level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Stream the formatted lines are written to
    #[serde(default)]
    pub stream: LogStream,

    /// Let `RUST_LOG` directives refine the level
    #[serde(default = "default_true")]
    pub respect_rust_log: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            stream: LogStream::default(),
            respect_rust_log: true,
        }
    }
}

/// The single sink log lines go to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogStream {
    /// Standard output
    #[default]
    Stdout,
    /// Standard error
    Stderr,
}

impl LogStream {
    /// Lowercase name as accepted by configuration
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

impl FromStr for LogStream {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            _ => Err(LoggingError::InvalidLogStream(s.to_string())),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_true() -> bool {
    true
}
