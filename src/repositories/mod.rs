//! Data access layer
//!
//! Stores are plain structs constructed explicitly and handed to services
//! as `Arc<dyn AccountStore>`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::accounts::{AccountStore, InMemoryAccountStore};
//!
//! let store: Arc<dyn AccountStore> = Arc::new(InMemoryAccountStore::new());
//! let account = store.get_by_email("ama@example.com", false).await?;
//! ```

pub mod accounts;
