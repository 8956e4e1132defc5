//! Rental account service
//!
//! Account management and bearer token validation for a vehicle rental
//! backend: registration, lookup, partial update, soft delete, password
//! hashing and stateless JWT checks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API, AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← request/response mapping
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← AccountService, TokenService, BcryptHasher
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  AccountStore   │ ← MongoDB or in-memory
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rental_account_service::repositories::accounts::InMemoryAccountStore;
//! use rental_account_service::services::{accounts::AccountService, security::BcryptHasher};
//!
//! let service = AccountService::new(
//!     Arc::new(InMemoryAccountStore::new()),
//!     Arc::new(BcryptHasher::new(10)),
//! );
//! let account = service.create_account(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
