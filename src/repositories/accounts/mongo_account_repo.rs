//! # MongoDB account store
//!
//! Stores accounts in the `accounts` collection.
//!
//! ## Indexes
//!
//! - `email_unique`: `email` ascending, UNIQUE. This index, not the service's
//!   pre-check, is what keeps one account per email when creations race.
//! - `created_at_desc`: `created_at` descending
//!
//! ## Failure mapping
//!
//! | MongoDB error                                | `StoreError`   |
//! |----------------------------------------------|----------------|
//! | write/command error code 11000               | `DuplicateKey` |
//! | I/O, server selection, pool cleared, timeout | `Unavailable`  |
//! | anything else                                | `Backend`      |

use std::future::IntoFuture;
use std::time::Duration;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    error::{CommandError, ErrorKind, WriteError, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::core::errors::StoreError;
use crate::db::Database;
use crate::domain::entities::accounts::Account;
use super::AccountStore;

const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB-backed [`AccountStore`]
///
/// ```rust,ignore
/// let database = Database::new().await?;
/// let store = MongoAccountStore::new(&database, DatabaseConfig::store_timeout());
/// store.create_indexes().await?;
///
/// let service = AccountService::new(Arc::new(store), hasher);
/// ```
pub struct MongoAccountStore {
    collection: Collection<Account>,
    /// Upper bound for every store call
    timeout: Duration,
}

impl MongoAccountStore {
    pub const COLLECTION: &'static str = "accounts";

    pub fn new(database: &Database, timeout: Duration) -> Self {
        Self {
            collection: database.get_database().collection::<Account>(Self::COLLECTION),
            timeout,
        }
    }

    /// Creates the unique email index and the creation-date index.
    ///
    /// Called once at startup. Fails if existing documents already violate
    /// email uniqueness.
    pub async fn create_indexes(&self) -> Result<(), StoreError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.bounded(self.collection.create_indexes([email_index, created_at_index]))
            .await?;

        Ok(())
    }

    /// Projection that drops credentials from a read.
    fn public_projection() -> Document {
        doc! { "password_hash": 0 }
    }

    /// Runs a MongoDB operation under the configured timeout.
    async fn bounded<T, F>(&self, operation: F) -> Result<T, StoreError>
    where
        F: IntoFuture<Output = mongodb::error::Result<T>>,
    {
        with_timeout(self.timeout, operation).await
    }
}

async fn with_timeout<T, F>(timeout: Duration, operation: F) -> Result<T, StoreError>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(result) => result.map_err(map_mongo_error),
        Err(_) => Err(StoreError::Unavailable(format!(
            "store call timed out after {:?}",
            timeout
        ))),
    }
}

#[async_trait]
impl AccountStore for MongoAccountStore {
    async fn insert(&self, account: Account) -> Result<Account, StoreError> {
        self.bounded(self.collection.insert_one(&account)).await?;

        log::debug!("account {} inserted", account.id);
        Ok(account)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Account>, StoreError> {
        self.bounded(
            self.collection
                .find_one(doc! { "_id": id })
                .projection(Self::public_projection()),
        )
        .await
    }

    async fn get_by_email(
        &self,
        email: &str,
        include_password_hash: bool,
    ) -> Result<Option<Account>, StoreError> {
        let find = self.collection.find_one(doc! { "email": email });

        if include_password_hash {
            self.bounded(find).await
        } else {
            self.bounded(find.projection(Self::public_projection())).await
        }
    }

    async fn list_all(&self) -> Result<Vec<Account>, StoreError> {
        self.bounded(async {
            let cursor = self
                .collection
                .find(doc! {})
                .projection(Self::public_projection())
                .sort(doc! { "created_at": 1 })
                .await?;

            cursor.try_collect::<Vec<Account>>().await
        })
        .await
    }

    async fn update(&self, account: Account) -> Result<Account, StoreError> {
        let result = self
            .bounded(
                self.collection
                    .replace_one(doc! { "_id": account.id.as_str() }, &account),
            )
            .await?;

        if result.matched_count == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(account)
    }
}

fn is_duplicate_key(kind: &ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::Write(WriteFailure::WriteError(WriteError { code: DUPLICATE_KEY_CODE, .. }))
            | ErrorKind::Command(CommandError { code: DUPLICATE_KEY_CODE, .. })
    )
}

fn map_mongo_error(error: mongodb::error::Error) -> StoreError {
    let kind = error.kind.as_ref();

    if is_duplicate_key(kind) {
        return StoreError::DuplicateKey;
    }

    match kind {
        ErrorKind::Io(_)
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::ConnectionPoolCleared { .. } => StoreError::Unavailable(error.to_string()),
        _ => StoreError::Backend(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use mongodb::bson::from_document;

    fn duplicate_write_error() -> mongodb::error::Error {
        let write_error: WriteError = from_document(doc! {
            "code": DUPLICATE_KEY_CODE,
            "codeName": "DuplicateKey",
            "errmsg": "E11000 duplicate key error collection: rental.accounts index: email_unique",
        })
        .unwrap();

        mongodb::error::Error::from(ErrorKind::Write(WriteFailure::WriteError(write_error)))
    }

    fn connection_refused() -> mongodb::error::Error {
        mongodb::error::Error::from(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"))
    }

    #[actix_web::test]
    async fn test_hung_call_times_out_as_unavailable() {
        let result = with_timeout(
            Duration::from_millis(10),
            std::future::pending::<mongodb::error::Result<()>>(),
        )
        .await;

        match result {
            Err(StoreError::Unavailable(message)) => assert!(message.contains("timed out")),
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_completed_call_passes_through() {
        let result = with_timeout(Duration::from_secs(1), async { Ok::<_, mongodb::error::Error>(7) }).await;

        assert_eq!(result.unwrap(), 7);
    }

    #[actix_web::test]
    async fn test_driver_error_inside_deadline_is_mapped() {
        let result = with_timeout(Duration::from_secs(1), async { Err::<(), _>(duplicate_write_error()) }).await;

        assert!(matches!(result, Err(StoreError::DuplicateKey)));
    }

    #[test]
    fn test_duplicate_key_code_maps_to_duplicate_key() {
        let error = duplicate_write_error();

        assert!(is_duplicate_key(error.kind.as_ref()));
        assert!(matches!(map_mongo_error(error), StoreError::DuplicateKey));
    }

    #[test]
    fn test_io_failure_is_unavailable_not_duplicate() {
        let error = connection_refused();

        assert!(!is_duplicate_key(error.kind.as_ref()));
        assert!(matches!(map_mongo_error(error), StoreError::Unavailable(_)));
    }

    #[test]
    fn test_other_write_codes_are_backend_errors() {
        let write_error: WriteError = from_document(doc! { "code": 121, "errmsg": "Document failed validation" }).unwrap();
        let error = mongodb::error::Error::from(ErrorKind::Write(WriteFailure::WriteError(write_error)));

        assert!(matches!(map_mongo_error(error), StoreError::Backend(_)));
    }
}
