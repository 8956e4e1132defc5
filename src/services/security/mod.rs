//! Credential cryptography

pub mod password_hasher;

pub use password_hasher::{BcryptHasher, PasswordHasher};
