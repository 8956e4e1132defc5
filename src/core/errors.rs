//! Application-wide error system
//!
//! Unified error handling for the account service. Errors are typed with
//! `thiserror` and rendered as HTTP responses through
//! `actix_web::ResponseError`.
//!
//! ## Error kinds
//!
//! | Variant               | Meaning                                   | Status |
//! |-----------------------|-------------------------------------------|--------|
//! | `ValidationError`     | malformed input, caller must fix it       | 400    |
//! | `ConflictError`       | duplicate email                           | 409    |
//! | `NotFound`            | unknown account id                        | 404    |
//! | `AuthenticationError` | bad credentials or rejected token         | 401    |
//! | `StorageUnavailable`  | backing store unreachable or timed out    | 503    |
//! | `DatabaseError`       | any other store failure                   | 500    |
//! | `ConfigError`         | missing or invalid startup configuration  | 500    |
//! | `InternalError`       | hashing/signing failure                   | 500    |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn get_account(id: &str) -> Result<AccountResponse, AppError> {
//!     let account = store.get_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("account not found".to_string()))?;
//!     Ok(AccountResponse::from(account))
//! }
//! ```

use thiserror::Error;

/// Application error type
///
/// Covers every failure the account core can report. Business-rule
/// violations are raised by the service layer with a specific kind;
/// infrastructure failures bubble up unchanged from the store, hasher and
/// token validator.
#[derive(Error, Debug)]
pub enum AppError {
    /// Input validation failure (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Resource not found (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness conflict (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// Authentication failure (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Backing store unreachable or timed out (503 Service Unavailable)
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Non-connectivity store failure (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Missing or invalid configuration, fatal at startup
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal failure such as hashing or signing (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Short machine-readable kind used in response bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::ConflictError(_) => "conflict",
            AppError::AuthenticationError(_) => "authentication_failed",
            AppError::StorageUnavailable(_) => "storage_unavailable",
            AppError::DatabaseError(_) => "database_error",
            AppError::ConfigError(_) => "config_error",
            AppError::InternalError(_) => "internal_error",
        }
    }

    /// Detail message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::StorageUnavailable(msg)
            | AppError::DatabaseError(msg)
            | AppError::ConfigError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the HTTP error response.
    ///
    /// Internal failures are logged in full and answered with a generic
    /// message so no hashing, signing or database detail reaches the client.
    fn error_response(&self) -> actix_web::HttpResponse {
        let message = match self {
            AppError::InternalError(_) | AppError::DatabaseError(_) | AppError::ConfigError(_) => {
                log::error!("{}", self);
                "An internal error occurred".to_string()
            }
            AppError::StorageUnavailable(_) => {
                log::error!("{}", self);
                "The account store is temporarily unavailable".to_string()
            }
            _ => self.message().to_string(),
        };

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.kind(),
                "message": message,
            }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    /// Enumerates every failed rule as `field: message`.
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect();
        messages.sort();

        AppError::ValidationError(messages.join("; "))
    }
}

/// Failures reported by an [`AccountStore`](crate::repositories::accounts::AccountStore).
///
/// Kept separate from [`AppError`] so the store stays ignorant of business
/// messages; the service translates with `?`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The unique email index already holds the value.
    #[error("duplicate key")]
    DuplicateKey,

    /// No record with the given id.
    #[error("record not found")]
    NotFound,

    /// Connectivity loss or timeout.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Any other backend failure.
    #[error("store failure: {0}")]
    Backend(String),
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::DuplicateKey => AppError::ConflictError("email exists".to_string()),
            StoreError::NotFound => AppError::NotFound("account not found".to_string()),
            StoreError::Unavailable(msg) => AppError::StorageUnavailable(msg),
            StoreError::Backend(msg) => AppError::DatabaseError(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Attaches context to foreign errors, producing `InternalError`.
///
/// ```rust,ignore
/// let digest = bcrypt::hash(password, cost).context("password hashing failed")?;
/// ```
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::ValidationError("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::ConflictError("x".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::AuthenticationError("x".into()).status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::StorageUnavailable("x".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::InternalError("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_response_is_generic() {
        let error = AppError::InternalError("bcrypt exploded".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_error_body_carries_kind_and_detail() {
        let response = AppError::ConflictError("email exists".to_string()).error_response();
        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "conflict");
        assert_eq!(json["message"], "email exists");
    }

    #[test]
    fn test_store_error_translation() {
        assert!(matches!(
            AppError::from(StoreError::DuplicateKey),
            AppError::ConflictError(msg) if msg == "email exists"
        ));
        assert!(matches!(AppError::from(StoreError::NotFound), AppError::NotFound(_)));
        assert!(matches!(
            AppError::from(StoreError::Unavailable("timeout".into())),
            AppError::StorageUnavailable(_)
        ));
        assert!(matches!(
            AppError::from(StoreError::Backend("bad doc".into())),
            AppError::DatabaseError(_)
        ));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
