//! Rental account service
//!
//! Boots the Actix-web HTTP server: loads the environment profile, connects
//! to MongoDB, builds the account and token services and serves the REST API.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use rental_account_service::config::{DatabaseConfig, Environment, ServerConfig};
use rental_account_service::core::errors::AppError;
use rental_account_service::db::Database;
use rental_account_service::repositories::accounts::{AccountStore, MongoAccountStore};
use rental_account_service::routes::configure_all_routes;
use rental_account_service::services::{
    accounts::AccountService,
    auth::TokenService,
    security::BcryptHasher,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 rental account service starting ({:?})...", Environment::current());

    let (account_service, token_service) = match initialize_services().await {
        Ok(services) => services,
        Err(e) => {
            error!("startup failed: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ services initialized");

    start_http_server(account_service, token_service).await
}

/// Builds the store, hasher and token validator.
///
/// A missing `JWT_SECRET`, an invalid `MONGODB_URI` or an unreachable
/// database aborts startup.
async fn initialize_services() -> Result<(web::Data<AccountService>, web::Data<TokenService>), AppError> {
    let token_service = TokenService::from_config()?;

    info!("📡 connecting to MongoDB...");
    let database = Database::new().await?;

    let store = MongoAccountStore::new(&database, DatabaseConfig::store_timeout());
    store.create_indexes().await?;
    info!("✅ account store ready on database {}", database.database_name());

    let hasher = BcryptHasher::from_config();
    info!("bcrypt cost: {}", hasher.cost());

    let store: Arc<dyn AccountStore> = Arc::new(store);
    let account_service = AccountService::new(store, Arc::new(hasher));

    Ok((web::Data::new(account_service), web::Data::new(token_service)))
}

/// Configures and runs the HTTP server with CORS, request logging and
/// trailing-slash normalization.
async fn start_http_server(
    account_service: web::Data<AccountService>,
    token_service: web::Data<TokenService>,
) -> std::io::Result<()> {
    let bind_address = (ServerConfig::host(), ServerConfig::port());

    info!("🌐 listening on http://{}:{}", bind_address.0, bind_address.1);
    info!("📍 Health check: http://{}:{}/health", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .app_data(account_service.clone())
            .app_data(token_service.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// Loads `.env.prod` or `.env.dev` depending on `PROFILE`, else `.env`.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    // the logger is not initialized yet
    if let Err(e) = loaded {
        eprintln!("profile {}: no environment file loaded ({})", profile, e);
    }
}

/// `RUST_LOG` filter, defaulting to `info,actix_web=info`.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS for the configured frontend origins.
fn configure_cors() -> Cors {
    ServerConfig::cors_allowed_origins()
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
