//! Bearer token middleware
//!
//! Rejects requests without a valid access token with `401` and stores the
//! verified [`AccountClaim`](crate::domain::models::auth::AccountClaim) in
//! the request extensions for the handlers behind it.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// Requires a valid bearer token.
///
/// The [`TokenService`](crate::services::auth::TokenService) is read from
/// the application data, so it must be registered with `app_data`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, web, App, HttpResponse};
    use chrono::Duration;
    use jsonwebtoken::Algorithm;
    use crate::domain::entities::accounts::{Account, Role};
    use crate::domain::models::auth::AccountClaim;
    use crate::services::auth::TokenService;

    #[get("/whoami")]
    async fn whoami(claim: AccountClaim) -> HttpResponse {
        HttpResponse::Ok().json(claim)
    }

    fn token_service() -> TokenService {
        TokenService::new("middleware-secret", Algorithm::HS256, Duration::hours(1)).unwrap()
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler_with_claim() {
        let tokens = web::Data::new(token_service());
        let account = Account::new(
            "Kofi Boateng".to_string(),
            "kofi@example.com".to_string(),
            "digest".to_string(),
            None,
            Some(Role::Admin),
        );
        let token = tokens.issue_access_token(&account).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(tokens.clone())
                .service(web::scope("").wrap(AuthMiddleware::required()).service(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let claim: AccountClaim = test::call_and_read_body_json(&app, req).await;

        assert_eq!(claim.subject_id, account.id);
        assert_eq!(claim.role, Role::Admin);
    }

    #[actix_web::test]
    async fn test_missing_or_bad_token_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_service()))
                .service(web::scope("").wrap(AuthMiddleware::required()).service(whoami)),
        )
        .await;

        let missing = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, missing).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let garbage = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request();
        let resp = test::call_service(&app, garbage).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "authentication_failed");
    }
}
