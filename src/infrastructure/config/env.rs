use std::collections::BTreeMap;
use std::env;

use crate::domain::error::ConfigError;
use crate::domain::ports::{validate_pair, EnvStore};

/// `EnvStore` adapter over the real process environment
///
/// Every instance shares the same underlying state: the environment of the
/// running process. Concurrent mutation from several threads is the caller's
/// concern, as it is for `std::env` itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // var_os rather than var: a non-UTF-8 value is still "set"
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        validate_pair(key, value)?;
        env::set_var(key, value);
        Ok(())
    }
}

/// In-memory `EnvStore`, isolated from the process environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of variables held
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True when no variable is set
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Remove `key`, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    /// Iterate over pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl EnvStore for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        validate_pair(key, value)?;
        self.vars.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
