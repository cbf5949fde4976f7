//! Configuration constants.
//!
//! This module defines the panel endpoints the client talks to and the defaults
//! applied when a caller leaves a limit unset.

/// Default User-Agent string for panel requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("iw4m_client/", env!("CARGO_PKG_VERSION"));

// JSON endpoints
/// Status of every managed server (JSON array).
pub const ENDPOINT_STATUS: &str = "/api/status";
/// Aggregate client counters (JSON object).
pub const ENDPOINT_INFO: &str = "/api/info";
/// Prefix of the per-client statistics endpoint; the client id is appended.
pub const ENDPOINT_STATS_PREFIX: &str = "/api/stats/";
/// Client search by name or xuid (JSON).
pub const ENDPOINT_CLIENT_FIND: &str = "/api/client/find";

// HTML endpoints
/// Home page: map, chat, players, sidebar.
pub const ENDPOINT_HOME: &str = "/";
/// About page with the server rules.
pub const ENDPOINT_ABOUT: &str = "/About";
/// Recent player reports.
pub const ENDPOINT_RECENT_REPORTS: &str = "/Action/RecentReportsForm/";
/// Command reference.
pub const ENDPOINT_HELP: &str = "/Home/Help";
/// Web console with the server selector.
pub const ENDPOINT_CONSOLE: &str = "/Console";
/// Edit form whose level select lists every assignable role.
pub const ENDPOINT_EDIT_FORM: &str = "/Action/editForm/?id=2&meta=";
/// Recent clients form; takes `offset` and `count`.
pub const ENDPOINT_RECENT_CLIENTS: &str = "/Action/RecentClientsForm";
/// Audit log table.
pub const ENDPOINT_AUDIT_LOG: &str = "/Admin/AuditLog";
/// Privileged clients, one table per role.
pub const ENDPOINT_PRIVILEGED: &str = "/Client/Privileged";
/// Ranked players; takes `offset`, `count` and `serverId`.
pub const ENDPOINT_TOP_PLAYERS: &str = "/Stats/GetTopPlayersAsync";

/// Path prefix of a player's profile link. The client id is whatever follows it.
pub const CLIENT_PROFILE_PREFIX: &str = "/Client/Profile/";
/// Number of leading bytes stripped from a profile href to obtain the client id.
pub const CLIENT_ID_PREFIX_LEN: usize = CLIENT_PROFILE_PREFIX.len();

// Limits and defaults
/// Audit log entries returned when the caller asks for zero or fewer.
pub const DEFAULT_AUDIT_LOG_COUNT: usize = 15;
/// Top players requested when the caller asks for zero or fewer.
pub const DEFAULT_TOP_PLAYERS_COUNT: usize = 10;
/// Page size of the recent clients form.
pub const RECENT_CLIENTS_PAGE_SIZE: usize = 20;
/// Upper bound used when scanning every admin, e.g. for name lookups.
pub const ADMIN_LOOKUP_LIMIT: usize = 1000;

/// Role filter that selects every privileged table.
pub const ALL_ROLES: &str = "all";
/// Game label used for admins whose row carries no game badge.
pub const NOT_APPLICABLE: &str = "N/A";
/// Implicit role ranked above everything the panel lists in its edit form.
pub const SUPER_ROLE: &str = "creator";
