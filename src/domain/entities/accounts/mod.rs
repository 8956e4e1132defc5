//! Accounts Entity Module
//!
//! ```rust,ignore
//! use crate::domain::entities::accounts::{Account, Role};
//!
//! let account = Account::new(
//!     "Kofi Boateng".to_string(),
//!     "kofi@example.com".to_string(),
//!     password_hash,
//!     Some("+233201234567".to_string()),
//!     Some(Role::Driver),
//! );
//! ```

pub mod account;

pub use account::{Account, Role};
