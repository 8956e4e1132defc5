//! Authenticated caller identity
//!
//! Produced by the token validator and placed into request extensions by
//! [`AuthMiddleware`](crate::middlewares::AuthMiddleware). Handlers take it
//! as an extractor.

use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use crate::core::errors::AppError;
use serde::{Deserialize, Serialize};
use crate::domain::entities::accounts::Role;
use crate::domain::models::token::TokenClaims;

/// Verified claim of a bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountClaim {
    pub subject_id: String,
    pub email: String,
    pub role: Role,
}

impl From<TokenClaims> for AccountClaim {
    fn from(claims: TokenClaims) -> Self {
        Self {
            subject_id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

impl FromRequest for AccountClaim {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AccountClaim>() {
            Some(claim) => ready(Ok(claim.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "unauthenticated request".to_string()
            ))),
        }
    }
}
