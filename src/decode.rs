//! JSON decoding for the panel's API endpoints.
//!
//! Pure field mapping: unknown fields are ignored, missing required fields
//! surface as `PanelError::Parse` naming the endpoint.

use serde::de::DeserializeOwned;

use crate::error_handling::{PanelError, Result};
use crate::models::PlayerStats;

/// Decodes `body` into `T`, attributing failures to `endpoint`.
pub fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| PanelError::Parse {
        endpoint: endpoint.to_string(),
        source,
    })
}

/// Decodes the stats endpoint, which answers with an array of which only the
/// first element is meaningful.
///
/// # Errors
///
/// `PanelError::NotFound` when the array is empty.
pub fn decode_player_stats(endpoint: &str, body: &str) -> Result<PlayerStats> {
    let stats: Vec<PlayerStats> = decode(endpoint, body)?;
    stats
        .into_iter()
        .next()
        .ok_or_else(|| PanelError::not_found(format!("player stats at {endpoint}")))
}
