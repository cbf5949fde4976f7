//! Records extracted from rendered panel pages.
//!
//! Every text field is trimmed; records are plain values built fresh per call.

use std::collections::BTreeMap;

use serde::Serialize;

/// One player listed on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerListing {
    pub role: String,
    pub name: String,
    /// Profile href with the profile path prefix removed.
    #[serde(rename = "clientId")]
    pub client_id: String,
    pub url: String,
}

/// A player report from the recent reports form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub origin: String,
    pub reason: String,
    pub target: String,
    /// Shared by every report of the same block.
    pub timestamp: String,
}

/// Help page content keyed by section title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Help {
    pub sections: BTreeMap<String, HelpSection>,
}

/// One help section and its commands keyed by command name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpSection {
    pub title: String,
    pub commands: BTreeMap<String, Command>,
}

/// A command row of the help page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub alias: String,
    pub description: String,
    pub requires_target: String,
    pub syntax: String,
    pub min_level: String,
}

/// A server entry of the console's server selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerId {
    #[serde(rename = "server")]
    pub name: String,
    pub id: String,
}

/// A line of the live chat feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub sender: String,
    pub message: String,
}

/// A client from the recent clients form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecentClient {
    pub name: String,
    pub link: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,
    pub ip_address: String,
    pub last_seen: String,
}

/// One row of the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditLogEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub origin: String,
    /// Profile link of the origin.
    pub href: String,
    pub target: String,
    pub data: String,
    pub time: String,
}

/// A privileged client from the privileged clients page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Admin {
    pub name: String,
    pub role: String,
    pub game: String,
    pub last_connected: String,
}

/// One entry of the top players ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopPlayer {
    /// Rank prefixed with `#`.
    pub rank: String,
    pub name: String,
    pub link: String,
    pub rating: String,
    /// Secondary stat label to value.
    pub stats: BTreeMap<String, String>,
}
