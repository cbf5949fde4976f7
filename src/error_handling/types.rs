//! Error type definitions.
//!
//! This module defines the errors surfaced by panel operations and by
//! application initialization.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Boxed error produced by a [`crate::Transport`] implementation.
pub type TransportSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by panel operations.
///
/// List-oriented views never return `NotFound`; they skip malformed entries
/// instead. Scalar views (map name, game mode, version, logged-in identity)
/// fail with `NotFound` when their anchor or field is absent.
#[derive(Error, Debug)]
pub enum PanelError {
    /// The network call itself failed (connect, timeout, body read).
    #[error("Transport error requesting {endpoint}: {source}")]
    Transport {
        /// Endpoint (path and query) that was requested
        endpoint: String,
        /// Underlying transport failure
        #[source]
        source: TransportSource,
    },

    /// A JSON body was structurally invalid or missed a required field.
    #[error("Failed to parse response from {endpoint}: {source}")]
    Parse {
        /// Endpoint (path and query) whose body failed to decode
        endpoint: String,
        /// Decoder error, including line/column
        #[source]
        source: serde_json::Error,
    },

    /// A required single value or its anchor container is missing from the page.
    #[error("{0} not found")]
    NotFound(String),

    /// The caller supplied arguments that cannot produce a request.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PanelError {
    /// Wraps any transport failure for `endpoint`.
    pub fn transport(endpoint: impl Into<String>, source: impl Into<TransportSource>) -> Self {
        PanelError::Transport {
            endpoint: endpoint.into(),
            source: source.into(),
        }
    }

    /// Shorthand for a missing required field.
    pub fn not_found(what: impl Into<String>) -> Self {
        PanelError::NotFound(what.into())
    }
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}
