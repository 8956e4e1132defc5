//! Domain models
//!
//! Non-persistent domain types:
//!
//! - [`token`] - JWT claim set as encoded on the wire
//! - [`auth`] - the verified caller identity handed to handlers

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
