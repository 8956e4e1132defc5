//! Middlewares
//!
//! Cross-cutting request handling for the HTTP pipeline.
//!
//! - [`AuthMiddleware`] - bearer token validation, claim in request extensions
//!
//! # Usage
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .app_data(token_service.clone())
//!     .service(
//!         web::scope("/api/v1/accounts")
//!             .service(handlers::accounts::create_account) // public
//!             .service(
//!                 web::scope("")
//!                     .wrap(AuthMiddleware::required())
//!                     .service(handlers::accounts::get_account)
//!             )
//!     );
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
