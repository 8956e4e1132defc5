//! Core infrastructure
//!
//! Cross-cutting types shared by every layer. Currently this is the error
//! system: [`AppError`] for the service boundary and [`StoreError`] for the
//! persistence boundary.

pub mod errors;

pub use errors::*;
