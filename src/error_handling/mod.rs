//! Error handling.
//!
//! Panel errors fall into four categories:
//! - **Transport**: the network call failed; never retried internally
//! - **Parse**: a JSON body could not be decoded; carries the endpoint
//! - **NotFound**: a required single HTML value is absent; names the field
//! - **InvalidArgument**: rejected before any request is issued
//!
//! Initialization errors (logger, HTTP client) are kept separate.

mod types;

// Re-export public API
pub use types::{InitializationError, PanelError, TransportSource};

/// Result alias used by every panel operation.
pub type Result<T, E = PanelError> = std::result::Result<T, E>;
