//! envlog - environment configuration and process logging
//!
//! Two independent pieces of startup glue:
//!
//! - **Config accessor** (`infrastructure::config`): read environment
//!   variables with a caller-supplied default, optionally loading a `.env`
//!   file first.
//! - **Logger initializer** (`infrastructure::logging`): install one global
//!   tracing subscriber writing `<timestamp> - <target> - <LEVEL> - <message>`
//!   lines to standard output.
//!
//! # Example
//!
//! ```no_run
//! use envlog::infrastructure::{config, logging};
//!
//! fn main() -> anyhow::Result<()> {
//!     config::load_env(".env")?;
//!     logging::init()?;
//!
//!     let api_key = config::get("API_KEY", None);
//!     logging::info!(has_key = api_key.is_some(), "starting");
//!     Ok(())
//! }
//! ```

pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{LogStream, LoggingConfig};
pub use domain::ports::EnvStore;
pub use domain::{ConfigError, LoggingError};
pub use infrastructure::config::{Config, LoadPolicy, LoadSummary, MemoryEnv, ProcessEnv};
pub use infrastructure::logging::LoggerImpl;
