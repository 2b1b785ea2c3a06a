//! Infrastructure layer module
//!
//! Adapters over process-wide facilities:
//! - Configuration access (environment variables, `.env` files)
//! - Logging infrastructure

pub mod config;
pub mod logging;
