//! JWT claim set
//!
//! Registered claims (`sub`, `iat`, `exp`) plus the account's email and role.
//! Unknown claims in a presented token are ignored on decode; `iat` is
//! optional there, only `sub` and `exp` are required.

use serde::{Deserialize, Serialize};
use crate::domain::entities::accounts::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Account id
    pub sub: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    pub exp: i64,
}
