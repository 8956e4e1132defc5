//! Domain layer
//!
//! ```text
//! domain/
//! ├── entities/   persistent records (Account, Role)
//! ├── dto/        HTTP request/response shapes
//! └── models/     token claims and caller identity
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::accounts::{Account, Role};
pub use dto::*;
pub use models::*;
