//! Server-wide views.

use log::debug;

use crate::config::{
    ALL_ROLES, DEFAULT_TOP_PLAYERS_COUNT, ENDPOINT_ABOUT, ENDPOINT_AUDIT_LOG, ENDPOINT_CONSOLE,
    ENDPOINT_EDIT_FORM, ENDPOINT_HELP, ENDPOINT_HOME, ENDPOINT_INFO, ENDPOINT_PRIVILEGED,
    ENDPOINT_RECENT_CLIENTS, ENDPOINT_RECENT_REPORTS, ENDPOINT_STATUS, ENDPOINT_TOP_PLAYERS,
    RECENT_CLIENTS_PAGE_SIZE,
};
use crate::decode::decode;
use crate::error_handling::{PanelError, Result};
use crate::extract;
use crate::models::{
    Admin, AuditLogEntry, ChatMessage, Help, PlayerListing, RecentClient, Report, ServerId,
    ServerInfo, ServerStatus, TopPlayer,
};
use crate::transport::{Session, Transport};

impl<T: Transport> Session<T> {
    /// Status of every server the panel manages, including connected players.
    ///
    /// # Errors
    ///
    /// `Transport` on network failure, `Parse` when the body is not a status array.
    pub async fn status(&self) -> Result<Vec<ServerStatus>> {
        let body = self.request(ENDPOINT_STATUS).await?;
        decode(ENDPOINT_STATUS, &body)
    }

    /// Aggregate client counters.
    ///
    /// # Errors
    ///
    /// `Transport` on network failure, `Parse` when the body is not an info record.
    pub async fn info(&self) -> Result<ServerInfo> {
        let body = self.request(ENDPOINT_INFO).await?;
        decode(ENDPOINT_INFO, &body)
    }

    /// Name of the map currently played.
    ///
    /// # Errors
    ///
    /// `Transport` on network failure, `NotFound` when the home page has no map block.
    pub async fn map_name(&self) -> Result<String> {
        let html = self.request(ENDPOINT_HOME).await?;
        extract::map_name(&html)
    }

    /// Game mode currently played.
    ///
    /// # Errors
    ///
    /// `Transport` on network failure, `NotFound` when the home page has no map block.
    pub async fn game_mode(&self) -> Result<String> {
        let html = self.request(ENDPOINT_HOME).await?;
        extract::game_mode(&html)
    }

    /// Version string shown in the panel sidebar.
    ///
    /// # Errors
    ///
    /// `Transport` on network failure, `NotFound` when no version badge is shown.
    pub async fn iw4m_version(&self) -> Result<String> {
        let html = self.request(ENDPOINT_HOME).await?;
        extract::iw4m_version(&html)
    }

    /// Name of the user the session cookie belongs to.
    ///
    /// # Errors
    ///
    /// `Transport` on network failure, `NotFound` when the page shows no identity
    /// (usually an expired cookie).
    pub async fn logged_in_as(&self) -> Result<String> {
        let html = self.request(ENDPOINT_HOME).await?;
        extract::logged_in_as(&html)
    }

    /// Server rules from the about page.
    pub async fn rules(&self) -> Result<Vec<String>> {
        let html = self.request(ENDPOINT_ABOUT).await?;
        Ok(extract::rules(&html))
    }

    /// Recent player reports.
    pub async fn reports(&self) -> Result<Vec<Report>> {
        let html = self.request(ENDPOINT_RECENT_REPORTS).await?;
        Ok(extract::reports(&html))
    }

    /// Command reference grouped by section.
    pub async fn help(&self) -> Result<Help> {
        let html = self.request(ENDPOINT_HELP).await?;
        Ok(extract::help(&html))
    }

    /// Servers selectable from the web console.
    pub async fn server_ids(&self) -> Result<Vec<ServerId>> {
        let html = self.request(ENDPOINT_CONSOLE).await?;
        Ok(extract::server_ids(&html))
    }

    /// Live chat feed from the home page.
    pub async fn read_chat(&self) -> Result<Vec<ChatMessage>> {
        let html = self.request(ENDPOINT_HOME).await?;
        Ok(extract::read_chat(&html))
    }

    /// Connected players, grouped by role from highest to lowest rank.
    pub async fn list_players(&self) -> Result<Vec<PlayerListing>> {
        let html = self.request(ENDPOINT_HOME).await?;
        Ok(extract::list_players(&html))
    }

    /// Role names as displayed, highest privilege first.
    pub async fn roles(&self) -> Result<Vec<String>> {
        let html = self.request(ENDPOINT_EDIT_FORM).await?;
        Ok(extract::roles(&html))
    }

    /// Internal role identifiers, in the same order as [`Self::roles`].
    pub async fn stock_roles(&self) -> Result<Vec<String>> {
        let html = self.request(ENDPOINT_EDIT_FORM).await?;
        Ok(extract::stock_roles(&html))
    }

    /// One page of recently connected clients starting at `offset`.
    pub async fn recent_clients(&self, offset: usize) -> Result<Vec<RecentClient>> {
        let endpoint =
            format!("{ENDPOINT_RECENT_CLIENTS}?offset={offset}&count={RECENT_CLIENTS_PAGE_SIZE}");
        let html = self.request(&endpoint).await?;
        Ok(extract::recent_clients(&html))
    }

    /// The newest audit log entry, `None` when the log is empty.
    pub async fn recent_audit_log(&self) -> Result<Option<AuditLogEntry>> {
        let html = self.request(ENDPOINT_AUDIT_LOG).await?;
        Ok(extract::recent_audit_log(&html))
    }

    /// Up to `count` audit log entries; zero means the default of 15.
    pub async fn audit_logs(&self, count: usize) -> Result<Vec<AuditLogEntry>> {
        let html = self.request(ENDPOINT_AUDIT_LOG).await?;
        Ok(extract::audit_logs(&html, count))
    }

    /// Privileged clients holding `role` (`"all"` or empty for every role),
    /// at most `count` of them; zero means no limit.
    pub async fn admins(&self, role: &str, count: usize) -> Result<Vec<Admin>> {
        let role = if role.trim().is_empty() { ALL_ROLES } else { role };
        let html = self.request(ENDPOINT_PRIVILEGED).await?;
        Ok(extract::admins(&html, role, count))
    }

    /// The `count` best ranked players across all servers; zero requests the
    /// default page of 10.
    pub async fn top_players(&self, count: usize) -> Result<Vec<TopPlayer>> {
        let count = if count == 0 {
            DEFAULT_TOP_PLAYERS_COUNT
        } else {
            count
        };
        let endpoint = format!("{ENDPOINT_TOP_PLAYERS}?offset=0&count={count}&serverId=0");
        let html = self.request(&endpoint).await?;
        Ok(extract::top_players(&html, count))
    }

    /// Command prefix in use, read from the first character of the newest
    /// audit entry's command text.
    ///
    /// # Errors
    ///
    /// `Transport` on network failure, `NotFound` when the audit log is empty or
    /// its newest entry carries no command text.
    pub async fn command_prefix(&self) -> Result<char> {
        let entry = self
            .recent_audit_log()
            .await?
            .ok_or_else(|| PanelError::not_found("recent audit log entry"))?;
        let prefix = entry
            .data
            .chars()
            .next()
            .ok_or_else(|| PanelError::not_found("command prefix"))?;
        debug!("Command prefix is '{prefix}'");
        Ok(prefix)
    }
}
