//! # Bearer token service
//!
//! Stateless JWT handling: validation of presented bearer tokens and
//! issuance of access tokens after a successful login.
//!
//! ## Validation
//!
//! A token is accepted when it is structurally well-formed, signed with the
//! configured secret under the configured algorithm, and its `exp` lies in
//! the future (no leeway). The claim handed downstream is
//! `{subject_id, email, role}`; any other embedded field is ignored.
//!
//! ## Trust model
//!
//! The account store is never consulted. A valid, unexpired token stays
//! valid after its account is deactivated, until it expires. There is no
//! revocation list.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::accounts::Account;
use crate::domain::models::auth::AccountClaim;
use crate::domain::models::token::TokenClaims;

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    access_token_ttl: Duration,
}

impl TokenService {
    /// Builds a validator for an HMAC secret.
    ///
    /// An empty secret or a non-HMAC algorithm is an [`AppError::ConfigError`].
    pub fn new(secret: &str, algorithm: Algorithm, access_token_ttl: Duration) -> Result<Self, AppError> {
        if secret.trim().is_empty() {
            return Err(AppError::ConfigError("JWT signing secret must not be empty".to_string()));
        }
        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(AppError::ConfigError(format!(
                "unsupported signing algorithm: {:?}",
                algorithm
            )));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            access_token_ttl,
        })
    }

    /// Reads `JWT_SECRET`, `JWT_ALGORITHM` and `JWT_EXPIRATION_HOURS`.
    pub fn from_config() -> Result<Self, AppError> {
        let secret = JwtConfig::secret()?;
        let algorithm = JwtConfig::algorithm()?;

        Self::new(&secret, algorithm, Duration::hours(JwtConfig::expiration_hours()))
    }

    /// Lifetime of issued access tokens in seconds.
    pub fn expires_in(&self) -> i64 {
        self.access_token_ttl.num_seconds()
    }

    /// Verifies a bearer token and extracts the caller's claim.
    ///
    /// Every rejection is an [`AppError::AuthenticationError`]; the reason is
    /// only logged.
    pub fn validate(&self, token: &str) -> Result<AccountClaim, AppError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| AccountClaim::from(data.claims))
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "token expired",
                    ErrorKind::InvalidSignature => "invalid signature",
                    ErrorKind::InvalidAlgorithm => "unexpected algorithm",
                    _ => "malformed token",
                };
                log::warn!("bearer token rejected: {} ({})", reason, e);
                AppError::AuthenticationError("invalid or expired token".to_string())
            })
    }

    /// Signs an access token for the account.
    pub fn issue_access_token(&self, account: &Account) -> AppResult<String> {
        let now = Utc::now();

        let claims = TokenClaims {
            sub: account.id.clone(),
            email: account.email.clone(),
            role: account.role,
            iat: Some(now.timestamp()),
            exp: (now + self.access_token_ttl).timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .with_context(|| format!("signing token for account {} failed", account.id))
    }

    /// Extracts the token from an `Authorization: Bearer <token>` header value.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("invalid authorization header".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::accounts::Role;
    use serde_json::json;

    const SECRET: &str = "test-signing-secret";

    fn service() -> TokenService {
        TokenService::new(SECRET, Algorithm::HS256, Duration::hours(1)).unwrap()
    }

    fn sign(claims: serde_json::Value, secret: &str, algorithm: Algorithm) -> String {
        encode(&Header::new(algorithm), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    #[test]
    fn test_accepts_valid_token_and_extracts_claim() {
        let exp = (Utc::now() + Duration::minutes(10)).timestamp();
        let token = sign(
            json!({
                "sub": "0b6f1c1e-8d4a-4a43-9d0b-3f2f3f7b2a10",
                "email": "ama@example.com",
                "role": "driver",
                "iat": Utc::now().timestamp(),
                "exp": exp,
                "tenant": "ignored"
            }),
            SECRET,
            Algorithm::HS256,
        );

        let claim = service().validate(&token).unwrap();

        assert_eq!(claim, AccountClaim {
            subject_id: "0b6f1c1e-8d4a-4a43-9d0b-3f2f3f7b2a10".to_string(),
            email: "ama@example.com".to_string(),
            role: Role::Driver,
        });
    }

    #[test]
    fn test_accepts_token_without_issued_at() {
        let token = sign(
            json!({
                "sub": "id",
                "email": "ama@example.com",
                "role": "admin",
                "exp": (Utc::now() + Duration::minutes(10)).timestamp()
            }),
            SECRET,
            Algorithm::HS256,
        );

        let claim = service().validate(&token).unwrap();

        assert_eq!(claim.subject_id, "id");
        assert_eq!(claim.role, Role::Admin);
    }

    #[test]
    fn test_rejects_expired_token_with_valid_signature() {
        let token = sign(
            json!({
                "sub": "id",
                "email": "ama@example.com",
                "role": "customer",
                "iat": (Utc::now() - Duration::hours(2)).timestamp(),
                "exp": (Utc::now() - Duration::seconds(5)).timestamp()
            }),
            SECRET,
            Algorithm::HS256,
        );

        assert!(matches!(service().validate(&token), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_rejects_wrong_signature() {
        let token = sign(
            json!({
                "sub": "id",
                "email": "ama@example.com",
                "role": "customer",
                "iat": Utc::now().timestamp(),
                "exp": (Utc::now() + Duration::minutes(10)).timestamp()
            }),
            "another-secret",
            Algorithm::HS256,
        );

        assert!(matches!(service().validate(&token), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_rejects_unexpected_algorithm() {
        let token = sign(
            json!({
                "sub": "id",
                "email": "ama@example.com",
                "role": "customer",
                "iat": Utc::now().timestamp(),
                "exp": (Utc::now() + Duration::minutes(10)).timestamp()
            }),
            SECRET,
            Algorithm::HS512,
        );

        assert!(service().validate(&token).is_err());
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        assert!(service().validate("").is_err());
        assert!(service().validate("not.a.jwt").is_err());
        assert!(service().validate("abc").is_err());
    }

    #[test]
    fn test_rejects_unknown_role_and_missing_exp() {
        let bad_role = sign(
            json!({
                "sub": "id",
                "email": "ama@example.com",
                "role": "pilot",
                "iat": Utc::now().timestamp(),
                "exp": (Utc::now() + Duration::minutes(10)).timestamp()
            }),
            SECRET,
            Algorithm::HS256,
        );
        let no_exp = sign(
            json!({ "sub": "id", "email": "ama@example.com", "role": "customer", "iat": 0 }),
            SECRET,
            Algorithm::HS256,
        );

        assert!(service().validate(&bad_role).is_err());
        assert!(service().validate(&no_exp).is_err());
    }

    #[test]
    fn test_issued_token_round_trips() {
        let account = Account::new(
            "Ama Mensah".to_string(),
            "ama@example.com".to_string(),
            "digest".to_string(),
            None,
            Some(Role::Manager),
        );

        let token = service().issue_access_token(&account).unwrap();
        let claim = service().validate(&token).unwrap();

        assert_eq!(claim.subject_id, account.id);
        assert_eq!(claim.email, "ama@example.com");
        assert_eq!(claim.role, Role::Manager);
        assert_eq!(service().expires_in(), 3600);
    }

    #[test]
    fn test_empty_secret_is_fatal() {
        assert!(matches!(
            TokenService::new("", Algorithm::HS256, Duration::hours(1)),
            Err(AppError::ConfigError(_))
        ));
        assert!(matches!(
            TokenService::new(SECRET, Algorithm::RS256, Duration::hours(1)),
            Err(AppError::ConfigError(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(service().extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(service().extract_bearer_token("Basic abc").is_err());
        assert!(service().extract_bearer_token("Bearer ").is_err());
    }
}
