//! Configuration types.
//!
//! This module defines the enums and structs used to configure a panel session
//! and the logger.

use clap::ValueEnum;
use thiserror::Error;

use crate::config::constants::DEFAULT_USER_AGENT;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// A configuration field that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong with it
    pub message: String,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use iw4m_client::Config;
///
/// let config = Config {
///     base_url: "http://127.0.0.1:1624".to_string(),
///     cookie: ".AspNetCore.Cookies=abc".to_string(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Panel base address, e.g. `http://127.0.0.1:1624`
    pub base_url: String,

    /// Identifier of the game server this session targets
    pub server_id: String,

    /// Session cookie sent verbatim in the `Cookie` header
    pub cookie: String,

    /// Per-request timeout in seconds; `None` leaves deadlines to the caller
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:1624".to_string(),
            server_id: String::new(),
            cookie: String::new(),
            timeout_seconds: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks that the configuration can be used to open a session.
    ///
    /// # Errors
    ///
    /// Returns the first field that is unusable: a base URL that is not an
    /// absolute http(s) URL, an empty cookie, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| ConfigValidationError {
            field: "base_url",
            message: format!("'{}' is not a valid URL ({e}); expected e.g. http://host:1624", self.base_url),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigValidationError {
                field: "base_url",
                message: format!("scheme must be http or https, got '{}'", parsed.scheme()),
            });
        }
        if self.cookie.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "cookie",
                message: "a session cookie is required; log in to the panel and copy it".to_string(),
            });
        }
        if self.timeout_seconds == Some(0) {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0 when set".to_string(),
            });
        }
        Ok(())
    }
}
