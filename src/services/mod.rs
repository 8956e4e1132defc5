//! Service layer
//!
//! Business logic on top of the repositories. Services are plain structs
//! constructed once at startup with their collaborators and shared through
//! `web::Data`.
//!
//! - [`accounts`] - registration, lookup, update, deactivation, credential checks
//! - [`auth`] - bearer token validation and issuance
//! - [`security`] - password hashing
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::{accounts::AccountService, auth::TokenService, security::BcryptHasher};
//!
//! let accounts = AccountService::new(store, Arc::new(BcryptHasher::from_config()));
//! let tokens = TokenService::from_config()?;
//! ```

pub mod accounts;
pub mod auth;
pub mod security;
