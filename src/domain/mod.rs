//! Domain layer for envlog
//!
//! Error types, the logging settings model and the environment port.

pub mod error;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use error::{ConfigError, LoggingError};
