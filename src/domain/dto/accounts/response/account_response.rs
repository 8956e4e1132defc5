//! Account response DTOs
//!
//! Outward representations of an account. None of them carries the
//! password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::accounts::{Account, Role};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        let Account {
            id,
            full_name,
            email,
            phone_number,
            role,
            is_active,
            created_at,
            updated_at,
            ..
        } = account;

        Self {
            id,
            full_name,
            email,
            phone_number,
            role,
            is_active,
            created_at,
            updated_at,
        }
    }
}

/// Confirmation returned by a soft delete; references the email, not the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeactivateAccountResponse {
    pub message: String,
}

impl DeactivateAccountResponse {
    pub fn for_email(email: &str) -> Self {
        Self {
            message: format!("account {} has been deactivated", email),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub account: AccountResponse,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl LoginResponse {
    pub fn new(account: Account, access_token: String, expires_in: i64) -> Self {
        Self {
            account: AccountResponse::from(account),
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}
