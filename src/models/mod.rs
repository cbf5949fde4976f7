//! Typed records returned by panel operations.

mod api;
mod page;

pub use api::{
    ClientSearch, ClientWindow, FoundClient, MapStatus, PlayerSnapshot, PlayerStats, ServerInfo,
    ServerStatus,
};
pub use page::{
    Admin, AuditLogEntry, ChatMessage, Command, Help, HelpSection, PlayerListing, RecentClient,
    Report, ServerId, TopPlayer,
};
