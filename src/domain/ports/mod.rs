//! Port trait definitions (Hexagonal Architecture)
//!
//! - `EnvStore`: key/value environment access used by the config accessor

pub mod env_store;

pub use env_store::{validate_pair, EnvStore};
