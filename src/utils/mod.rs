//! Shared utility functions
//!
//! # Modules
//!
//! - [`string_utils`] - email normalisation and optional-field helpers
//! - [`password_policy`] - password strength rules
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::normalize_email;
//! use crate::utils::password_policy::violations;
//!
//! let email = normalize_email("  Ama@Example.com ");
//! assert!(violations("MyP@ssw0rd").is_empty());
//! ```

pub mod string_utils;
pub mod password_policy;
