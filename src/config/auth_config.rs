//! Authentication configuration
//!
//! JWT signing settings. Unlike the data settings, a missing signing secret
//! is never defaulted: it is reported as [`AppError::ConfigError`] and the
//! binary refuses to start.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-key"   # required
//! export JWT_ALGORITHM="HS256"                # HS256, HS384, HS512
//! export JWT_EXPIRATION_HOURS="24"
//! ```

use std::env;
use jsonwebtoken::Algorithm;
use crate::core::errors::AppError;

/// JWT configuration
pub struct JwtConfig;

impl JwtConfig {
    /// Signing secret from `JWT_SECRET`.
    pub fn secret() -> Result<String, AppError> {
        Self::parse_secret(env::var("JWT_SECRET").ok())
    }

    pub fn parse_secret(raw: Option<String>) -> Result<String, AppError> {
        match raw {
            Some(secret) if !secret.trim().is_empty() => Ok(secret),
            _ => Err(AppError::ConfigError("JWT_SECRET must be set".to_string())),
        }
    }

    /// Expected signing algorithm from `JWT_ALGORITHM`, HS256 by default.
    pub fn algorithm() -> Result<Algorithm, AppError> {
        Self::parse_algorithm(env::var("JWT_ALGORITHM").ok().as_deref())
    }

    /// Only the HMAC family is accepted since tokens are signed with a shared secret.
    pub fn parse_algorithm(raw: Option<&str>) -> Result<Algorithm, AppError> {
        match raw.map(|s| s.trim().to_uppercase()).as_deref() {
            None | Some("") | Some("HS256") => Ok(Algorithm::HS256),
            Some("HS384") => Ok(Algorithm::HS384),
            Some("HS512") => Ok(Algorithm::HS512),
            Some(other) => Err(AppError::ConfigError(format!(
                "unsupported JWT_ALGORITHM: {}",
                other
            ))),
        }
    }

    /// Lifetime of issued access tokens.
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|hours: &i64| *hours > 0)
            .unwrap_or(24)
    }
}
