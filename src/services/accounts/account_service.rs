//! # Account management service
//!
//! Business rules over the [`AccountStore`]: registration, lookup, partial
//! update, soft delete and credential verification.
//!
//! ## Service architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       AccountService                       │
//! │                                                            │
//! │  create  -> duplicate check -> validate -> hash -> insert  │
//! │  update  -> load -> email re-check -> merge -> hash? -> put │
//! │  delete  -> load -> is_active = false -> put (idempotent)  │
//! │  verify  -> load with credential -> bcrypt verify          │
//! └───────────────┬──────────────────────────┬─────────────────┘
//!                 ▼                          ▼
//!       Arc<dyn AccountStore>       Arc<dyn PasswordHasher>
//! ```
//!
//! ## Rules
//!
//! - Emails are normalised (trimmed, lowercased) before every lookup or write.
//! - The duplicate-email pre-check only produces a friendly early error. The
//!   store's unique index is the real guarantee; a `DuplicateKey` from a
//!   racing insert is translated into the same `ConflictError`.
//! - Names are trimmed before they are validated, so a blank name fails the
//!   length rule instead of being stored empty.
//! - Hashing runs on the blocking pool and never while a store call is
//!   in flight.
//! - A login for an unknown email still runs one bcrypt verification, against
//!   a throwaway digest, so response time does not reveal which emails exist.
//! - Nothing returned to callers carries `password_hash`, except
//!   [`AccountService::get_account_by_email_with_credential`], which exists
//!   for authentication flows only.

use std::sync::Arc;
use actix_web::web;
use tokio::sync::OnceCell;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::accounts::{
    request::{CreateAccountRequest, UpdateAccountRequest},
    response::{AccountResponse, DeactivateAccountResponse},
};
use crate::domain::entities::accounts::Account;
use crate::repositories::accounts::AccountStore;
use crate::services::security::PasswordHasher;
use crate::utils::string_utils::{clean_optional_string, normalize_email};

const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Hashed once, on the first login for an unknown email.
const DUMMY_PASSWORD: &str = "unknown-account-placeholder";

/// Account business logic
///
/// Constructed explicitly with its collaborators:
///
/// ```rust,ignore
/// let store: Arc<dyn AccountStore> = Arc::new(MongoAccountStore::new(&database, timeout));
/// let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptHasher::from_config());
/// let service = AccountService::new(store, hasher);
///
/// let created = service.create_account(request).await?;
/// ```
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    hasher: Arc<dyn PasswordHasher>,
    dummy_digest: OnceCell<String>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher, dummy_digest: OnceCell::new() }
    }

    /// Registers a new account.
    ///
    /// # Returns
    ///
    /// * `Ok(AccountResponse)` - the stored account, without credentials
    /// * `Err(AppError::ConflictError)` - the email is already registered
    /// * `Err(AppError::ValidationError)` - every failed input rule, enumerated
    /// * `Err(AppError::InternalError)` - hashing failed
    /// * `Err(AppError::StorageUnavailable)` - the store could not be reached
    ///
    /// # Process
    ///
    /// 1. Reject a known email with `ConflictError("email exists")`
    /// 2. Validate name, email format and password strength
    /// 3. Hash the password
    /// 4. Default the role to customer, activate the account
    /// 5. Insert; a racing duplicate still ends as `ConflictError`
    pub async fn create_account(&self, mut request: CreateAccountRequest) -> Result<AccountResponse, AppError> {
        let start_time = std::time::Instant::now();
        request.email = normalize_email(&request.email);
        request.full_name = request.full_name.trim().to_string();

        if self.store.get_by_email(&request.email, false).await?.is_some() {
            return Err(AppError::ConflictError("email exists".to_string()));
        }

        request.validate()?;

        let password_hash = self.hash_password(request.password).await?;

        let account = Account::new(
            request.full_name,
            request.email,
            password_hash,
            clean_optional_string(request.phone_number),
            request.role,
        );

        let created = self.store.insert(account).await?;

        log::info!(
            "account {} created with role {} in {:?}",
            created.id,
            created.role,
            start_time.elapsed()
        );

        Ok(AccountResponse::from(created))
    }

    /// Looks an account up by id.
    ///
    /// * `Err(AppError::NotFound)` - no account with this id
    pub async fn get_account(&self, id: &str) -> Result<AccountResponse, AppError> {
        let account = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("account not found".to_string()))?;

        Ok(AccountResponse::from(account))
    }

    /// Full record including `password_hash`, for authentication flows only.
    ///
    /// Never expose the result to an untrusted caller.
    pub async fn get_account_by_email_with_credential(&self, email: &str) -> Result<Option<Account>, AppError> {
        Ok(self.store.get_by_email(&normalize_email(email), true).await?)
    }

    /// All accounts, without credentials.
    pub async fn list_accounts(&self) -> Result<Vec<AccountResponse>, AppError> {
        let accounts = self.store.list_all().await?;

        Ok(accounts.into_iter().map(AccountResponse::from).collect())
    }

    /// Applies a partial update.
    ///
    /// Only the fields present in `request` change; absent fields, including
    /// the stored password hash when no password is sent, stay untouched.
    /// A request with no field at all writes nothing and keeps `updated_at`.
    ///
    /// # Returns
    ///
    /// * `Err(AppError::NotFound)` - no account with this id
    /// * `Err(AppError::ValidationError)` - a present field breaks a rule
    /// * `Err(AppError::ConflictError)` - the new email belongs to another account
    pub async fn update_account(&self, id: &str, mut request: UpdateAccountRequest) -> Result<AccountResponse, AppError> {
        let mut account = self.load_with_credential(id).await?;

        if request.is_empty() {
            log::debug!("empty update for account {}, nothing to write", account.id);
            return Ok(AccountResponse::from(account));
        }

        request.email = request.email.take().map(|email| normalize_email(&email));
        request.full_name = request.full_name.take().map(|name| name.trim().to_string());
        request.validate()?;

        if let Some(email) = request.email.take() {
            if email != account.email {
                let taken = self
                    .store
                    .get_by_email(&email, false)
                    .await?
                    .is_some_and(|other| other.id != account.id);
                if taken {
                    return Err(AppError::ConflictError("email exists".to_string()));
                }
                account.email = email;
            }
        }

        if let Some(full_name) = request.full_name.take() {
            account.full_name = full_name;
        }
        if let Some(phone_number) = request.phone_number.take() {
            account.phone_number = clean_optional_string(phone_number);
        }
        if let Some(role) = request.role {
            account.role = role;
        }
        if let Some(is_active) = request.is_active {
            account.is_active = is_active;
        }
        if let Some(password) = request.password.take() {
            account.password_hash = Some(self.hash_password(password).await?);
        }

        account.touch();
        let updated = self.store.update(account).await?;

        log::info!("account {} updated", updated.id);
        Ok(AccountResponse::from(updated))
    }

    /// Soft-deletes an account by clearing `is_active`.
    ///
    /// Idempotent: an already inactive account is left as it is and the same
    /// confirmation is returned. The record is never removed.
    pub async fn deactivate_account(&self, id: &str) -> Result<DeactivateAccountResponse, AppError> {
        let mut account = self.load_with_credential(id).await?;

        if account.is_active {
            account.is_active = false;
            account.touch();
            account = self.store.update(account).await?;
            log::info!("account {} deactivated", account.id);
        } else {
            log::debug!("account {} already inactive", account.id);
        }

        Ok(DeactivateAccountResponse::for_email(&account.email))
    }

    /// Checks a plaintext password against the stored digest.
    ///
    /// An unknown email and a wrong password produce the same
    /// `AuthenticationError`, so callers cannot tell which emails exist.
    /// The active flag is not consulted here; see [`Self::authenticate`].
    /// Both paths run exactly one bcrypt verification.
    pub async fn verify_credential(&self, email: &str, password: &str) -> Result<Account, AppError> {
        let account = self.get_account_by_email_with_credential(email).await?;

        let digest = match account.as_ref() {
            Some(account) => account.password_hash.clone().unwrap_or_default(),
            None => self.dummy_digest().await?,
        };
        let matches = self.verify_password(password, digest).await?;

        match account {
            Some(account) if matches => Ok(account),
            _ => {
                log::warn!("credential check failed");
                Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))
            }
        }
    }

    /// Login policy: valid credentials of an active account.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Account, AppError> {
        let account = self.verify_credential(email, password).await?;

        if !account.is_active {
            log::warn!("login refused for inactive account {}", account.id);
            return Err(AppError::AuthenticationError("account is deactivated".to_string()));
        }

        Ok(account)
    }

    /// Loads the full record (with credentials) for a read-modify-write.
    ///
    /// `get_by_id` never returns the hash, so the record is re-read through
    /// the email lookup, the one read path allowed to include it.
    async fn load_with_credential(&self, id: &str) -> Result<Account, AppError> {
        let not_found = || AppError::NotFound("account not found".to_string());

        let account = self.store.get_by_id(id).await?.ok_or_else(not_found)?;

        self.store
            .get_by_email(&account.email, true)
            .await?
            .filter(|full| full.id == account.id)
            .ok_or_else(not_found)
    }

    /// Verifies on the blocking pool.
    async fn verify_password(&self, password: &str, digest: String) -> Result<bool, AppError> {
        let hasher = Arc::clone(&self.hasher);
        let plaintext = password.to_string();

        let start = std::time::Instant::now();
        let matches = web::block(move || hasher.verify(&plaintext, &digest))
            .await
            .map_err(|e| AppError::InternalError(format!("password verification failed: {}", e)))?;
        log::debug!("Password verification took: {:?}", start.elapsed());

        Ok(matches)
    }

    /// Digest compared against when the email is unknown.
    async fn dummy_digest(&self) -> Result<String, AppError> {
        self.dummy_digest
            .get_or_try_init(|| self.hash_password(DUMMY_PASSWORD.to_string()))
            .await
            .cloned()
    }

    /// Hashes on the blocking pool.
    async fn hash_password(&self, password: String) -> Result<String, AppError> {
        let hasher = Arc::clone(&self.hasher);

        web::block(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::InternalError(format!("password hashing failed: {}", e)))?
    }
}
