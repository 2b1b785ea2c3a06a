use crate::domain::error::ConfigError;

/// Port trait for key/value environment storage
///
/// The config accessor reads and writes through this trait instead of
/// touching the process environment directly. Adapters live in
/// `infrastructure::config`:
/// - `ProcessEnv` wraps `std::env`
/// - `MemoryEnv` keeps pairs in memory, for isolated use and tests
///
/// # Examples
///
/// ```
/// use envlog::domain::ports::EnvStore;
/// use envlog::infrastructure::config::MemoryEnv;
///
/// let mut env = MemoryEnv::new();
/// env.set("API_KEY", "secret").unwrap();
/// assert_eq!(env.get("API_KEY").as_deref(), Some("secret"));
/// assert!(!env.contains("MISSING"));
/// ```
pub trait EnvStore {
    /// Raw string value for `key`, or `None` when unset
    fn get(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`, replacing any existing value
    ///
    /// Fails with `ConfigError::InvalidKey` for an empty key or one containing
    /// `=` or NUL, and `ConfigError::InvalidValue` for a value containing NUL.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError>;

    /// Whether `key` is set (an empty value counts as set)
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Check a key/value pair against what an OS environment accepts
pub fn validate_pair(key: &str, value: &str) -> Result<(), ConfigError> {
    if key.is_empty() || key.contains(['=', '\0']) {
        return Err(ConfigError::InvalidKey(key.to_string()));
    }
    if value.contains('\0') {
        return Err(ConfigError::InvalidValue(key.to_string()));
    }
    Ok(())
}
