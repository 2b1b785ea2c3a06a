pub mod config;

pub use config::{LogStream, LoggingConfig};
