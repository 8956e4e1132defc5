//! # HTTP request handlers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client                                        
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (this module)                       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services                                     ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories (AccountStore)                  ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities / DTOs                              ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Services arrive through `web::Data`, registered once in `main`:
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_account(
//!     service: web::Data<AccountService>,
//!     payload: web::Json<CreateAccountRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let response = service.create_account(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! - [`accounts`] - account CRUD under `/api/v1/accounts`
//! - [`auth`] - login and current account under `/api/v1/auth`

pub mod accounts;
pub mod auth;
