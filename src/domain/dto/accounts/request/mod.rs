//! Account request DTOs
//!
//! Deserialized from HTTP bodies and validated with `validator` before they
//! reach the service layer.

pub mod create_account_request;
pub mod update_account_request;
pub mod login_request;

pub use create_account_request::CreateAccountRequest;
pub use update_account_request::UpdateAccountRequest;
pub use login_request::LoginRequest;
