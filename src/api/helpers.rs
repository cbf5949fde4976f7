//! Fail-open convenience checks.
//!
//! These helpers answer simple presence questions on top of the regular views.
//! They never return an error: when the underlying request or decode fails
//! they log the failure at `warn` and fall back to a safe default (zero,
//! `false` or an empty record). Use the underlying view directly whenever the
//! caller must be able to tell "no" apart from "could not ask".

use log::warn;

use crate::config::{ADMIN_LOOKUP_LIMIT, ALL_ROLES};
use crate::extract::text::same_name;
use crate::models::Admin;
use crate::transport::{Session, Transport};

impl<T: Transport> Session<T> {
    /// Number of players listed on the home page; `0` on failure.
    pub async fn player_count(&self) -> usize {
        match self.list_players().await {
            Ok(players) => players.len(),
            Err(e) => {
                warn!("player_count: treating failure as 0 players: {e}");
                0
            }
        }
    }

    /// Whether every client slot is taken; `false` on failure.
    pub async fn is_server_full(&self) -> bool {
        match self.info().await {
            Ok(info) => info.total_connected_clients >= info.total_client_slots,
            Err(e) => {
                warn!("is_server_full: treating failure as not full: {e}");
                false
            }
        }
    }

    /// First privileged client named `name`, ignoring ASCII case.
    ///
    /// Returns an empty [`Admin`] when nobody matches or the lookup fails.
    pub async fn find_admin(&self, name: &str) -> Admin {
        match self.admins(ALL_ROLES, ADMIN_LOOKUP_LIMIT).await {
            Ok(admins) => admins
                .into_iter()
                .find(|admin| same_name(&admin.name, name))
                .unwrap_or_default(),
            Err(e) => {
                warn!("find_admin: treating failure as no match for '{name}': {e}");
                Admin::default()
            }
        }
    }

    /// Whether a player named exactly `name` is listed on the home page;
    /// `false` on failure.
    ///
    /// Unlike [`Session::find_admin`] the match is case-sensitive, so
    /// `"Alpha"` and `"alpha"` are different players.
    pub async fn is_player_online(&self, name: &str) -> bool {
        match self.list_players().await {
            Ok(players) => players
                .iter()
                .any(|player| player.name == name),
            Err(e) => {
                warn!("is_player_online: treating failure as offline for '{name}': {e}");
                false
            }
        }
    }
}
