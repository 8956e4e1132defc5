//! # Account creation request DTO
//!
//! Body of `POST /api/v1/accounts`.
//!
//! ## Rules
//!
//! - `fullName`: at least 2 characters
//! - `email`: syntactically valid; uniqueness is checked by the service and
//!   guaranteed by the store index
//! - `password`: see [`password_policy`](crate::utils::password_policy)
//! - `phoneNumber`: optional, free-form
//! - `role`: optional, one of customer/driver/manager/admin (customer when absent)
//!
//! Any other field is rejected at deserialization time.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::accounts::Role;
use crate::utils::password_policy::validate_password_strength;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateAccountRequest {
    #[validate(length(min = 2, message = "must be at least 2 characters long"))]
    pub full_name: String,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    #[serde(default)]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub role: Option<Role>,
}
