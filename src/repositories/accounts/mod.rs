//! Account persistence
//!
//! The [`AccountStore`] trait is the only thing the service layer knows
//! about storage. Two implementations ship with the crate:
//!
//! - [`MongoAccountStore`] - MongoDB collection with a unique email index
//! - [`InMemoryAccountStore`] - process-local store for tests and local runs
//!
//! # Contract
//!
//! - `insert` fails with [`StoreError::DuplicateKey`] when the email index
//!   already holds the value. The check and the write are one atomic step.
//! - `get_by_email(.., true)` is the only read that returns `password_hash`.
//! - `update` is a full replace by id and fails with [`StoreError::NotFound`]
//!   when the id is absent.
//! - Connectivity loss and timeouts surface as [`StoreError::Unavailable`];
//!   nothing is retried inside a store.

use async_trait::async_trait;
use crate::core::errors::StoreError;
use crate::domain::entities::accounts::Account;

pub mod mongo_account_repo;
pub mod memory_account_repo;

pub use mongo_account_repo::MongoAccountStore;
pub use memory_account_repo::InMemoryAccountStore;

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persists a new account.
    async fn insert(&self, account: Account) -> Result<Account, StoreError>;

    /// Looks an account up by id, without credentials.
    async fn get_by_id(&self, id: &str) -> Result<Option<Account>, StoreError>;

    /// Looks an account up by normalised email.
    async fn get_by_email(
        &self,
        email: &str,
        include_password_hash: bool,
    ) -> Result<Option<Account>, StoreError>;

    /// All accounts, without credentials, in creation order.
    async fn list_all(&self) -> Result<Vec<Account>, StoreError>;

    /// Replaces the stored record with the same id.
    async fn update(&self, account: Account) -> Result<Account, StoreError>;
}
