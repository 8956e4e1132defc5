//! Data Transfer Objects
//!
//! Request and response shapes exchanged with the HTTP layer. Entities never
//! leave the service boundary directly; they are converted into response
//! DTOs so credentials cannot leak.

pub mod accounts;

pub use accounts::*;
