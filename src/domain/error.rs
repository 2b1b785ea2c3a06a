use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or populating the environment
///
/// A missing variable is never an error; callers get their default back.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("env file not found: {}", path.display())]
    EnvFileNotFound { path: PathBuf },

    #[error("malformed env file {} near: {line}", path.display())]
    EnvFileParse { path: PathBuf, line: String },

    #[error("failed to read env file {}: {source}", path.display())]
    EnvFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid environment key: {0:?}. Must be non-empty and contain no '=' or NUL")]
    InvalidKey(String),

    #[error("Invalid value for environment key {0}: contains NUL")]
    InvalidValue(String),
}

impl ConfigError {
    /// True when the error is the missing-file case
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::EnvFileNotFound { .. })
    }
}

/// Errors raised while configuring the global logger
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log stream: {0}. Must be one of: stdout, stderr")]
    InvalidLogStream(String),

    #[error("Failed to extract logging configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
}
