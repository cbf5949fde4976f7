//! Per-player JSON views.

use url::form_urlencoded;

use crate::config::{ENDPOINT_CLIENT_FIND, ENDPOINT_STATS_PREFIX};
use crate::decode::{decode, decode_player_stats};
use crate::error_handling::{PanelError, Result};
use crate::models::{ClientSearch, PlayerStats};
use crate::transport::{Session, Transport};

/// Builds the client search endpoint with every value URL-encoded.
pub(crate) fn find_endpoint(
    name: &str,
    xuid: &str,
    count: usize,
    offset: usize,
    direction: i32,
) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("name", name)
        .append_pair("xuid", xuid)
        .append_pair("count", &count.to_string())
        .append_pair("offset", &offset.to_string())
        .append_pair("direction", &direction.to_string())
        .finish();
    format!("{ENDPOINT_CLIENT_FIND}?{query}")
}

impl<T: Transport> Session<T> {
    /// Aggregate statistics of one client.
    ///
    /// # Errors
    ///
    /// `Transport` on network failure, `Parse` on a malformed body, `NotFound`
    /// when the panel returns no statistics for `client_id`.
    pub async fn player_stats(&self, client_id: &str) -> Result<PlayerStats> {
        let endpoint = format!("{ENDPOINT_STATS_PREFIX}{client_id}");
        let body = self.request(&endpoint).await?;
        decode_player_stats(&endpoint, &body)
    }

    /// Searches clients by name and/or network id (xuid).
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when both `name` and `xuid` are empty; no request is
    /// issued in that case. Otherwise `Transport` or `Parse`.
    pub async fn find_player(
        &self,
        name: &str,
        xuid: &str,
        count: usize,
        offset: usize,
        direction: i32,
    ) -> Result<ClientSearch> {
        if name.is_empty() && xuid.is_empty() {
            return Err(PanelError::InvalidArgument(
                "either a player name or a xuid is required".to_string(),
            ));
        }

        let endpoint = find_endpoint(name, xuid, count, offset, direction);
        let body = self.request(&endpoint).await?;
        decode(&endpoint, &body)
    }
}
