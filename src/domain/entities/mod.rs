//! Domain entities
//!
//! Persistent records of the account core.

pub mod accounts;
