//! HTML extraction engine.
//!
//! Turns rendered panel pages into typed records. Every view:
//! - parses the raw page with `scraper`
//! - locates its anchor container(s) through the selector table in [`selectors`]
//! - reads fields from each container's own descendants, in document order
//!
//! List views degrade gracefully: a malformed container is skipped or leaves
//! a field empty. Scalar views (map name, game mode, version, logged-in
//! identity) fail with `PanelError::NotFound` instead.
//!
//! Extraction is pure: the same page always yields the same records.

mod about;
mod admins;
mod audit;
mod clients;
mod forms;
mod help;
mod home;
mod rankings;
mod reports;
pub mod selectors;
pub(crate) mod text;

// Re-export public API
pub use about::rules;
pub use admins::admins;
pub use audit::{audit_logs, recent_audit_log};
pub use clients::recent_clients;
pub use forms::{roles, server_ids, stock_roles};
pub use help::help;
pub use home::{game_mode, iw4m_version, list_players, logged_in_as, map_name, read_chat};
pub use rankings::top_players;
pub use reports::reports;
pub use selectors::View;
pub use text::{collapse_whitespace, strip_client_id};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
