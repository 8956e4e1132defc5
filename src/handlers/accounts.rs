//! # Account HTTP handlers
//!
//! | Method   | Path                     | Auth   | Success          |
//! |----------|--------------------------|--------|------------------|
//! | `POST`   | `/api/v1/accounts`       | public | 201 Created      |
//! | `GET`    | `/api/v1/accounts`       | bearer | 200 OK           |
//! | `GET`    | `/api/v1/accounts/{id}`  | bearer | 200 OK           |
//! | `PATCH`  | `/api/v1/accounts/{id}`  | bearer | 200 OK           |
//! | `DELETE` | `/api/v1/accounts/{id}`  | bearer | 200 OK (soft)    |
//!
//! Handlers only translate HTTP to service calls; every rule lives in
//! [`AccountService`]. Failures are rendered by [`AppError`]'s
//! `ResponseError` implementation.

use actix_web::{delete, get, patch, post, web, HttpResponse};
use crate::core::errors::AppError;
use crate::domain::dto::accounts::request::{CreateAccountRequest, UpdateAccountRequest};
use crate::domain::models::auth::AccountClaim;
use crate::services::accounts::AccountService;

/// Registers an account.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/accounts \
///   -H "Content-Type: application/json" \
///   -d '{"fullName":"Ama Mensah","email":"ama@example.com","password":"MyP@ssw0rd"}'
/// ```
#[post("")]
pub async fn create_account(
    service: web::Data<AccountService>,
    payload: web::Json<CreateAccountRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_account(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("")]
pub async fn list_accounts(
    service: web::Data<AccountService>,
) -> Result<HttpResponse, AppError> {
    let accounts = service.list_accounts().await?;

    Ok(HttpResponse::Ok().json(accounts))
}

#[get("/{account_id}")]
pub async fn get_account(
    service: web::Data<AccountService>,
    account_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let account = service.get_account(&account_id).await?;

    Ok(HttpResponse::Ok().json(account))
}

/// Partial update; absent fields are left unchanged, `"phoneNumber": null`
/// clears the phone number.
#[patch("/{account_id}")]
pub async fn update_account(
    service: web::Data<AccountService>,
    account_id: web::Path<String>,
    payload: web::Json<UpdateAccountRequest>,
    caller: AccountClaim,
) -> Result<HttpResponse, AppError> {
    log::info!("account {} update requested by {}", account_id, caller.subject_id);

    let account = service.update_account(&account_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(account))
}

/// Soft delete. Repeating it returns the same confirmation.
#[delete("/{account_id}")]
pub async fn deactivate_account(
    service: web::Data<AccountService>,
    account_id: web::Path<String>,
    caller: AccountClaim,
) -> Result<HttpResponse, AppError> {
    log::info!("account {} deactivation requested by {}", account_id, caller.subject_id);

    let response = service.deactivate_account(&account_id).await?;

    Ok(HttpResponse::Ok().json(response))
}
