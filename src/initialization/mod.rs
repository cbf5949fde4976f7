//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP client
//! - A ready-to-use panel session built from a [`Config`]

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::transport::{HttpTransport, Session};

/// Builds an HTTP-backed [`Session`] from configuration.
///
/// The configuration is expected to have passed [`Config::validate`].
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn init_session(config: &Config) -> Result<Session<HttpTransport>, InitializationError> {
    let client = init_client(config)?;
    Ok(Session::new(
        &config.base_url,
        &config.server_id,
        &config.cookie,
        HttpTransport::new(client),
    ))
}
