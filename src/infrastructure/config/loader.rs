use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::env::ProcessEnv;
use crate::domain::error::ConfigError;
use crate::domain::ports::EnvStore;

/// What `load_env` does with keys that are already set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Keep existing values, only fill in missing keys
    #[default]
    Preserve,
    /// Replace existing values with the file's
    Override,
}

/// Outcome of loading one env file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// File that was loaded
    pub path: PathBuf,
    /// Keys written to the store, in file order
    pub loaded: Vec<String>,
    /// Keys left alone because they were already set
    pub skipped: Vec<String>,
}

impl LoadSummary {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            loaded: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Environment-variable accessor
///
/// Owns an [`EnvStore`]; defaults to the process environment. Pass a
/// `MemoryEnv` for lookups that must not leak between callers (see
/// [`Config::load_env_with`] for how `.env` substitution reads variables).
///
/// # Examples
///
/// ```
/// use envlog::infrastructure::config::{Config, MemoryEnv};
///
/// let config = Config::new(MemoryEnv::from_iter([("X", "42")]));
/// assert_eq!(config.get("X", Some("fallback")).as_deref(), Some("42"));
/// assert_eq!(config.get("Y", Some("fallback")).as_deref(), Some("fallback"));
/// assert_eq!(config.get("Y", None), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config<S = ProcessEnv> {
    store: S,
}

impl Config<ProcessEnv> {
    /// Accessor over the process environment
    pub const fn from_process() -> Self {
        Self { store: ProcessEnv }
    }
}

impl<S: EnvStore> Config<S> {
    /// Accessor over `store`
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Value of `key`, or `default` when it is unset
    ///
    /// Absence is not an error. No coercion happens: `"42"` comes back as a
    /// string.
    pub fn get(&self, key: &str, default: Option<&str>) -> Option<String> {
        self.store
            .get(key)
            .or_else(|| default.map(str::to_string))
    }

    /// Value of `key`, or `default` when it is unset
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.store
            .get(key)
            .unwrap_or_else(|| default.to_string())
    }

    /// Load `KEY=VALUE` pairs from `path`, keeping keys that are already set
    pub fn load_env(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, ConfigError> {
        self.load_env_with(path, LoadPolicy::Preserve)
    }

    /// Load `KEY=VALUE` pairs from `path` under an explicit policy
    ///
    /// The file is parsed in full before anything is written, so a malformed
    /// file leaves the store untouched. A key repeated in the file under
    /// `Preserve` keeps its first value.
    ///
    /// `$VAR` and `${VAR}` references in values are expanded by dotenvy
    /// against the process environment and earlier lines of the same file,
    /// never against this accessor's store. A `MemoryEnv` store therefore
    /// still sees process values through substitution; write values without
    /// references (or single-quote them) to keep a load fully isolated.
    pub fn load_env_with(
        &mut self,
        path: impl AsRef<Path>,
        policy: LoadPolicy,
    ) -> Result<LoadSummary, ConfigError> {
        let path = path.as_ref();
        let pairs = read_env_file(path)?;

        let mut summary = LoadSummary::new(path);
        for (key, value) in pairs {
            if policy == LoadPolicy::Preserve && self.store.contains(&key) {
                summary.skipped.push(key);
                continue;
            }
            self.store.set(&key, &value)?;
            summary.loaded.push(key);
        }

        debug!(
            path = %path.display(),
            ?policy,
            loaded = summary.loaded.len(),
            skipped = summary.skipped.len(),
            "env file loaded"
        );

        Ok(summary)
    }

    /// Like [`Config::load_env`], but a missing file is `Ok(None)`
    pub fn load_env_if_present(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<Option<LoadSummary>, ConfigError> {
        match self.load_env(path) {
            Ok(summary) => Ok(Some(summary)),
            Err(err) if err.is_not_found() => {
                debug!(error = %err, "no env file, skipping");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// The underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consume the accessor, returning its store
    pub fn into_inner(self) -> S {
        self.store
    }
}

/// Parse an env file with dotenvy, without writing to any environment
fn read_env_file(path: &Path) -> Result<Vec<(String, String)>, ConfigError> {
    dotenvy::from_path_iter(path)
        .map_err(|e| map_dotenv_error(path, e))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| map_dotenv_error(path, e))
}

fn map_dotenv_error(path: &Path, err: dotenvy::Error) -> ConfigError {
    let path = path.to_path_buf();
    match err {
        dotenvy::Error::Io(source) if source.kind() == io::ErrorKind::NotFound => {
            ConfigError::EnvFileNotFound { path }
        }
        dotenvy::Error::Io(source) => ConfigError::EnvFileRead { path, source },
        dotenvy::Error::LineParse(line, _) => ConfigError::EnvFileParse { path, line },
        other => ConfigError::EnvFileParse {
            path,
            line: other.to_string(),
        },
    }
}

/// Value of `key` in the process environment, or `default` when unset
pub fn get(key: &str, default: Option<&str>) -> Option<String> {
    Config::from_process().get(key, default)
}

/// Load an env file into the process environment, keeping keys already set
pub fn load_env(path: impl AsRef<Path>) -> Result<LoadSummary, ConfigError> {
    Config::from_process().load_env(path)
}
