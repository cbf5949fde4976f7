//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used by [`crate::HttpTransport`].
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Timeout from the config, or none at all when unset
///
/// The client is wrapped in an `Arc` so one connection pool can back several
/// sessions.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let mut builder = ClientBuilder::new().user_agent(config.user_agent.clone());
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(Arc::new(builder.build()?))
}
