//! Authentication HTTP handlers
//!
//! - `POST /api/v1/auth/login` - email/password login, returns a bearer token
//! - `GET /api/v1/auth/me` - account of the presented token
//!
//! Tokens are short-lived access tokens only; there is no refresh or
//! revocation endpoint.
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::accounts::request::LoginRequest;
use crate::domain::dto::accounts::response::LoginResponse;
use crate::domain::models::auth::AccountClaim;
use crate::services::{accounts::AccountService, auth::TokenService};

/// Email/password login.
///
/// Unknown email, wrong password and a deactivated account all answer
/// `401`.
#[post("/login")]
pub async fn login(
    accounts: web::Data<AccountService>,
    tokens: web::Data<TokenService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let account = accounts.authenticate(&payload.email, &payload.password).await?;
    let access_token = tokens.issue_access_token(&account)?;

    log::info!("account {} logged in", account.id);

    Ok(HttpResponse::Ok().json(LoginResponse::new(account, access_token, tokens.expires_in())))
}

/// Current account, resolved from the bearer token's subject.
#[get("/me")]
pub async fn current_account(
    accounts: web::Data<AccountService>,
    caller: AccountClaim,
) -> Result<HttpResponse, AppError> {
    let account = accounts.get_account(&caller.subject_id).await?;

    Ok(HttpResponse::Ok().json(account))
}
