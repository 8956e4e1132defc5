//! Partial account update DTO
//!
//! Body of `PATCH /api/v1/accounts/{id}`. Every field is optional and only
//! the fields that are present are applied. `phoneNumber` additionally
//! distinguishes an explicit `null` (clear the number) from absence.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::accounts::Role;
use crate::utils::password_policy::validate_password_strength;
use crate::utils::string_utils::deserialize_present;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateAccountRequest {
    #[serde(default)]
    #[validate(length(min = 2, message = "must be at least 2 characters long"))]
    pub full_name: Option<String>,

    #[serde(default)]
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: Option<String>,

    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<Option<String>>,

    #[serde(default)]
    pub role: Option<Role>,

    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UpdateAccountRequest {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.phone_number.is_none()
            && self.role.is_none()
            && self.is_active.is_none()
    }
}
