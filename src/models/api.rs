//! Records decoded from the panel's JSON API.
//!
//! Field names follow the panel's camelCase wire format so that re-serialized
//! records stay compatible with consumers of the panel API.

use serde::{Deserialize, Serialize};

/// One game server as reported by `/api/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    pub id: i64,
    pub is_online: bool,
    pub name: String,
    pub max_players: i32,
    pub current_players: i32,
    pub map: MapStatus,
    pub game_mode: String,
    pub listen_address: String,
    pub listen_port: u16,
    pub game: String,
    /// Connected players in the order the panel lists them.
    pub players: Vec<PlayerSnapshot>,
}

/// Current map of a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapStatus {
    pub name: String,
    pub alias: String,
}

/// A connected player inside a [`ServerStatus`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub name: String,
    pub score: i32,
    pub ping: i32,
    pub state: String,
    pub client_number: i32,
    /// Seconds since the player connected.
    pub connection_time: i64,
    pub level: String,
}

/// Aggregate counters from `/api/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub total_connected_clients: i32,
    pub total_client_slots: i32,
    pub total_tracked_clients: i64,
    pub total_recent_clients: ClientWindow,
    pub max_concurrent_clients: ClientWindow,
}

/// A counter measured over a time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientWindow {
    pub value: i64,
    /// Time unit or peak timestamp; the panel sends `null` when it has none
    pub time: Option<String>,
    pub start_at: String,
    pub end_at: String,
}

/// Aggregate performance of one player from `/api/stats/{clientId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub name: String,
    pub ranking: i64,
    pub kills: i64,
    pub deaths: i64,
    pub performance: f64,
    pub score_per_minute: f64,
    pub last_played: String,
    pub total_seconds_played: i64,
    pub server_name: String,
    pub server_game: String,
}

/// Response of `/api/client/find`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSearch {
    pub total_found_clients: i64,
    pub clients: Vec<FoundClient>,
}

/// One match of a client search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundClient {
    pub name: String,
    pub xuid: String,
    pub client_id: i64,
}
