//! Authentication services
//!
//! - [`TokenService`] - bearer token validation and access token issuance

pub mod token_service;

pub use token_service::*;
