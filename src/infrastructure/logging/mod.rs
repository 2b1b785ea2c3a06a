//! Logging infrastructure
//!
//! A single process-wide tracing subscriber writing plain text lines:
//! `<timestamp> - <target> - <LEVEL> - <message>`.

pub mod config;
pub mod format;
pub mod logger;

pub use config::ENV_PREFIX;
pub use format::{level_name, LineFormat, LocalTimestamp};
pub use logger::{build_subscriber, init, LoggerImpl};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, trace, warn};
