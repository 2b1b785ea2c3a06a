//! Configuration access infrastructure
//!
//! Environment-variable lookups with caller-supplied defaults:
//! - `Config` accessor over any `EnvStore`
//! - `.env` file loading via dotenvy
//! - Process and in-memory stores

pub mod env;
pub mod loader;

pub use env::{MemoryEnv, ProcessEnv};
pub use loader::{get, load_env, Config, LoadPolicy, LoadSummary};
