//! # Configuration Module
//!
//! Environment-variable based settings, read through small typed accessors.
//!
//! ## Modules
//!
//! - [`data_config`] - environment, bcrypt cost, MongoDB and server settings
//! - [`auth_config`] - JWT signing settings
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::config::{JwtConfig, PasswordConfig, ServerConfig};
//!
//! let secret = JwtConfig::secret()?;          // fatal when unset
//! let cost = PasswordConfig::bcrypt_cost();   // 10 unless BCRYPT_COST says otherwise
//! let port = ServerConfig::port();
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
