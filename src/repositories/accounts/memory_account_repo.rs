//! In-memory account store
//!
//! Same contract as the MongoDB store. The email index and the records
//! live behind one write lock, so the uniqueness check and the write of an
//! `insert` or `update` cannot interleave with another caller.

use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::core::errors::StoreError;
use crate::domain::entities::accounts::Account;
use super::AccountStore;

#[derive(Default)]
struct MemoryState {
    accounts: HashMap<String, Account>,
    /// email -> id
    email_index: HashMap<String, String>,
    /// ids in insertion order
    order: Vec<String>,
}

#[derive(Default)]
pub struct InMemoryAccountStore {
    state: RwLock<MemoryState>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn insert(&self, account: Account) -> Result<Account, StoreError> {
        let mut state = self.state.write().await;

        if state.email_index.contains_key(&account.email)
            || state.accounts.contains_key(&account.id)
        {
            return Err(StoreError::DuplicateKey);
        }

        state.email_index.insert(account.email.clone(), account.id.clone());
        state.order.push(account.id.clone());
        state.accounts.insert(account.id.clone(), account.clone());

        Ok(account)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Account>, StoreError> {
        let state = self.state.read().await;

        Ok(state.accounts.get(id).map(Account::without_credential))
    }

    async fn get_by_email(
        &self,
        email: &str,
        include_password_hash: bool,
    ) -> Result<Option<Account>, StoreError> {
        let state = self.state.read().await;

        let account = state
            .email_index
            .get(email)
            .and_then(|id| state.accounts.get(id));

        Ok(account.map(|account| {
            if include_password_hash {
                account.clone()
            } else {
                account.without_credential()
            }
        }))
    }

    async fn list_all(&self) -> Result<Vec<Account>, StoreError> {
        let state = self.state.read().await;

        Ok(state
            .order
            .iter()
            .filter_map(|id| state.accounts.get(id))
            .map(Account::without_credential)
            .collect())
    }

    async fn update(&self, account: Account) -> Result<Account, StoreError> {
        let mut state = self.state.write().await;

        let previous_email = match state.accounts.get(&account.id) {
            Some(existing) => existing.email.clone(),
            None => return Err(StoreError::NotFound),
        };

        if previous_email != account.email {
            if state.email_index.contains_key(&account.email) {
                return Err(StoreError::DuplicateKey);
            }
            state.email_index.remove(&previous_email);
            state.email_index.insert(account.email.clone(), account.id.clone());
        }

        state.accounts.insert(account.id.clone(), account.clone());

        Ok(account)
    }
}
