//! Account Entity Implementation
//!
//! The user identity record of the rental platform. The entity carries no
//! cryptography: `password_hash` is always produced by the service layer
//! before the record reaches a store.

use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role
///
/// The fixed set of roles; no other string is ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Driver,
    Manager,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Driver => "driver",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account entity
///
/// Stored as-is by every [`AccountStore`](crate::repositories::accounts::AccountStore).
/// `password_hash` is `None` whenever the record was read through a
/// projection that omits credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// UUID v4, immutable
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    /// Normalised email (unique)
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates an active account with a fresh id and timestamps.
    pub fn new(
        full_name: String,
        email: String,
        password_hash: String,
        phone_number: Option<String>,
        role: Option<Role>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            full_name,
            email,
            password_hash: Some(password_hash),
            phone_number,
            role: role.unwrap_or_default(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Copy of the record without credentials.
    pub fn without_credential(&self) -> Self {
        Self {
            password_hash: None,
            ..self.clone()
        }
    }

    /// Refreshes `updated_at`; called on every successful mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_defaults() {
        let account = Account::new(
            "Ama Mensah".to_string(),
            "ama@example.com".to_string(),
            "digest".to_string(),
            None,
            None,
        );

        assert_eq!(account.role, Role::Customer);
        assert!(account.is_active);
        assert_eq!(account.created_at, account.updated_at);
        assert!(Uuid::parse_str(&account.id).is_ok());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Account::new("Ab".into(), "a@x.io".into(), "d".into(), None, None);
        let b = Account::new("Ab".into(), "b@x.io".into(), "d".into(), None, None);

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"manager\"");
        assert!(serde_json::from_str::<Role>("\"owner\"").is_err());
    }

    #[test]
    fn test_without_credential_drops_hash() {
        let account = Account::new("Ab".into(), "a@x.io".into(), "d".into(), None, None);
        let stripped = account.without_credential();

        assert!(stripped.password_hash.is_none());
        assert_eq!(stripped.id, account.id);
    }
}
