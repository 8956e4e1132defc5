//! Account DTOs
//!
//! - [`request`] - creation, partial update and login bodies
//! - [`response`] - outward account representations

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
