//! Role hierarchy.
//!
//! [`RoleTable`] is a snapshot of the panel's role listing, highest privilege
//! first. It is fetched once with [`Session::role_table`] and answers rank
//! queries locally; call [`RoleTable::refresh`] when the panel's roles may
//! have changed.
//!
//! Role names match ignoring ASCII case. The implicit super role
//! ([`SUPER_ROLE`]) is never listed by the panel but outranks every listed
//! role.

use std::cmp::Ordering;

use log::debug;

use crate::config::SUPER_ROLE;
use crate::error_handling::Result;
use crate::extract::text::same_name;
use crate::transport::{Session, Transport};

/// Ordered role names; index 0 is the highest listed rank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleTable {
    roles: Vec<String>,
}

impl RoleTable {
    /// Wraps an already fetched listing, highest privilege first.
    pub fn new(roles: Vec<String>) -> Self {
        Self { roles }
    }

    /// Replaces the snapshot with the panel's current role listing.
    ///
    /// The table is left untouched when the request fails.
    pub async fn refresh<T: Transport>(&mut self, session: &Session<T>) -> Result<()> {
        self.roles = session.roles().await?;
        debug!("Role table refreshed with {} roles", self.roles.len());
        Ok(())
    }

    /// Index of `role` in the listing, `None` when it is not listed.
    pub fn position(&self, role: &str) -> Option<usize> {
        self.roles.iter().position(|listed| same_name(listed, role))
    }

    /// Whether `role` is listed. The implicit super role is not.
    pub fn exists(&self, role: &str) -> bool {
        self.position(role).is_some()
    }

    /// Relative rank of `a` against `b`: `Greater` when `a` outranks `b`.
    ///
    /// The super role outranks everything, known or not, and ties with itself.
    /// Otherwise `None` when either role is unknown.
    pub fn compare(&self, a: &str, b: &str) -> Option<Ordering> {
        match (is_super_role(a), is_super_role(b)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Greater),
            (false, true) => Some(Ordering::Less),
            // A lower index is a higher rank.
            (false, false) => Some(self.position(b)?.cmp(&self.position(a)?)),
        }
    }

    /// Whether `a` strictly outranks `b`; `false` when they are not comparable.
    pub fn is_higher(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Some(Ordering::Greater)
    }

    /// Whether `a` is strictly outranked by `b`; `false` when they are not comparable.
    pub fn is_lower(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Some(Ordering::Less)
    }

    /// The listing, highest privilege first.
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Number of listed roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the listing is empty.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

fn is_super_role(role: &str) -> bool {
    same_name(role, SUPER_ROLE)
}

impl<T: Transport> Session<T> {
    /// Fetches the role listing once and returns it as a [`RoleTable`].
    pub async fn role_table(&self) -> Result<RoleTable> {
        Ok(RoleTable::new(self.roles().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RoleTable {
        RoleTable::new(vec![
            "Owner".to_string(),
            "Moderator".to_string(),
            "User".to_string(),
        ])
    }

    #[test]
    fn test_position_is_case_insensitive() {
        let table = table();
        assert_eq!(table.position("Moderator"), Some(1));
        assert_eq!(table.position("owner"), Some(0));
        assert_eq!(table.position(" USER "), Some(2));
        assert_eq!(table.position("Banned"), None);
    }

    #[test]
    fn test_super_role_is_not_listed() {
        let table = table();
        assert!(!table.exists("creator"));
        assert!(table.exists("moderator"));
    }

    #[test]
    fn test_is_higher_first_argument_outranks_second() {
        let table = table();
        assert!(table.is_higher("Owner", "User"));
        assert!(!table.is_higher("User", "Owner"));
        assert!(!table.is_higher("Moderator", "Moderator"));
    }

    #[test]
    fn test_is_lower_mirrors_is_higher() {
        let table = table();
        assert!(table.is_lower("User", "Owner"));
        assert!(!table.is_lower("Owner", "User"));
        assert!(!table.is_lower("User", "User"));
    }

    #[test]
    fn test_super_role_outranks_everything() {
        let table = table();
        assert!(table.is_higher("creator", "Owner"));
        assert!(table.is_higher("Creator", "User"));
        // Holds even for roles the table does not know.
        assert!(table.is_higher("creator", "Unknown"));
        assert!(!table.is_higher("Owner", "creator"));
        assert!(table.is_lower("Owner", "creator"));
        assert!(!table.is_higher("creator", "creator"));
        assert_eq!(table.compare("creator", "CREATOR"), Some(Ordering::Equal));
    }

    #[test]
    fn test_unknown_roles_are_not_comparable() {
        let table = table();
        assert_eq!(table.compare("Owner", "Banned"), None);
        assert!(!table.is_higher("Owner", "Banned"));
        assert!(!table.is_higher("Banned", "Owner"));
        assert!(!table.is_lower("Owner", "Banned"));
        assert!(!table.is_lower("Banned", "Owner"));
    }

    #[test]
    fn test_empty_table() {
        let table = RoleTable::default();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(!table.is_higher("Owner", "User"));
        assert!(table.is_higher("creator", "User"));
    }
}
