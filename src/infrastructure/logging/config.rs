use figment::providers::{Env, Serialized};
use figment::Figment;

use super::logger::parse_log_level;
use crate::domain::error::LoggingError;
use crate::domain::models::LoggingConfig;

/// Prefix for logger settings in the environment, e.g. `ENVLOG_LOG_LEVEL`
pub const ENV_PREFIX: &str = "ENVLOG_LOG_";

impl LoggingConfig {
    /// Defaults overlaid with `ENVLOG_LOG_*` environment variables
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load and validate settings from the environment
    pub fn from_env() -> Result<Self, LoggingError> {
        let config: Self = Self::figment().extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the level names a real threshold
    pub fn validate(&self) -> Result<(), LoggingError> {
        parse_log_level(&self.level).map(|_| ())
    }
}
