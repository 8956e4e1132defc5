//! Account response DTOs

pub mod account_response;

pub use account_response::{AccountResponse, DeactivateAccountResponse, LoginResponse};
