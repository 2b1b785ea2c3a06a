use anyhow::{Context, Result};
use std::io;
use std::sync::{Mutex, PoisonError};
use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use super::format::LineFormat;
use crate::domain::error::LoggingError;
use crate::domain::models::{LogStream, LoggingConfig};

/// Handle for the process-wide logger
#[derive(Debug)]
pub struct LoggerImpl {
    installed: bool,
}

impl LoggerImpl {
    /// Install the global subscriber described by `config`
    ///
    /// Writes `<timestamp> - <target> - <LEVEL> - <message>` lines to the
    /// configured stream. If a global subscriber is already set, this call
    /// leaves it in place and returns a handle with `installed() == false`:
    /// the first configuration wins.
    ///
    /// # Errors
    /// Returns an error if `config.level` is not a valid level
    pub fn init(config: &LoggingConfig) -> Result<Self> {
        let installed = match config.stream {
            LogStream::Stdout => build_subscriber(config, io::stdout)?.try_init().is_ok(),
            LogStream::Stderr => build_subscriber(config, io::stderr)?.try_init().is_ok(),
        };

        if installed {
            tracing::info!(
                level = %config.level,
                stream = config.stream.as_str(),
                respect_rust_log = config.respect_rust_log,
                "logger initialized"
            );
        } else {
            tracing::debug!("global subscriber already set, keeping existing configuration");
        }

        Ok(Self { installed })
    }

    /// Whether this call installed the global subscriber
    pub const fn installed(&self) -> bool {
        self.installed
    }
}

/// Build the subscriber for `config` without installing it
///
/// Lets callers route output to their own writer, e.g. with
/// `tracing::subscriber::with_default`.
pub fn build_subscriber<W>(
    config: &LoggingConfig,
    make_writer: W,
) -> Result<impl Subscriber + Send + Sync + 'static>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = build_filter(config)?;

    let layer = tracing_subscriber::fmt::layer()
        .event_format(LineFormat::new())
        .with_writer(make_writer)
        .with_ansi(false)
        .with_filter(filter);

    Ok(tracing_subscriber::registry().with(layer))
}

/// Load settings from the environment and install the logger, once
///
/// Later calls after a successful one do nothing. A failed call can be
/// retried.
pub fn init() -> Result<()> {
    static INITIALIZED: Mutex<bool> = Mutex::new(false);

    let mut initialized = INITIALIZED.lock().unwrap_or_else(PoisonError::into_inner);
    if *initialized {
        return Ok(());
    }

    let config = LoggingConfig::from_env().context("Failed to load logging configuration")?;
    LoggerImpl::init(&config)?;
    *initialized = true;
    Ok(())
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let default_level = parse_log_level(&config.level)?;

    let builder = EnvFilter::builder().with_default_directive(default_level.into());
    let filter = if config.respect_rust_log {
        builder.from_env_lossy()
    } else {
        builder.parse_lossy("")
    };
    Ok(filter)
}

/// Parse log level string to Level
pub(crate) fn parse_log_level(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(LoggingError::InvalidLogLevel(level.to_string())),
    }
}
