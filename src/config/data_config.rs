//! Data, server and environment configuration
//!
//! Values are read from environment variables on every call so that a
//! `.env` file loaded at startup (see `main.rs`) is honoured.
//!
//! ```bash
//! export ENVIRONMENT="production"   # development, test, staging, production
//! export BCRYPT_COST="10"           # 4-31
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="rental_accounts"
//! export STORE_TIMEOUT_MS="5000"
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export CORS_ALLOWED_ORIGINS="https://rental.example.com"
//! ```

use std::env;
use std::time::Duration;

/// Deployment environment
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// Reads `ENVIRONMENT`, defaulting to production.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// Password hashing configuration
pub struct PasswordConfig;

impl PasswordConfig {
    pub const DEFAULT_COST: u32 = 10;

    /// bcrypt work factor from `BCRYPT_COST`.
    ///
    /// Values outside bcrypt's accepted range (4-31) or unparsable values fall
    /// back to [`Self::DEFAULT_COST`].
    pub fn bcrypt_cost() -> u32 {
        Self::parse_cost(env::var("BCRYPT_COST").ok().as_deref())
    }

    pub fn parse_cost(raw: Option<&str>) -> u32 {
        match raw.and_then(|s| s.trim().parse::<u32>().ok()) {
            Some(cost) if (4..=31).contains(&cost) => cost,
            Some(cost) => {
                log::warn!("BCRYPT_COST {} out of range, using {}", cost, Self::DEFAULT_COST);
                Self::DEFAULT_COST
            }
            None => Self::DEFAULT_COST,
        }
    }
}

/// MongoDB connection configuration
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "rental_accounts".to_string())
    }

    /// Upper bound for a single store call.
    pub fn store_timeout() -> Duration {
        let millis = env::var("STORE_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(5000);

        Duration::from_millis(millis)
    }
}

/// HTTP server configuration
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// Comma-separated `CORS_ALLOWED_ORIGINS`, defaulting to the local frontend.
    pub fn cors_allowed_origins() -> Vec<String> {
        Self::parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())
    }

    pub fn parse_origins(raw: Option<&str>) -> Vec<String> {
        raw.unwrap_or("http://localhost:3000,http://127.0.0.1:3000")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_cors_origins_parsing() {
        assert_eq!(ServerConfig::parse_origins(None).len(), 2);
        assert_eq!(
            ServerConfig::parse_origins(Some(" https://a.example , ,https://b.example")),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn test_bcrypt_cost_parsing() {
        assert_eq!(PasswordConfig::parse_cost(None), 10);
        assert_eq!(PasswordConfig::parse_cost(Some("12")), 12);
        assert_eq!(PasswordConfig::parse_cost(Some(" 4 ")), 4);
        assert_eq!(PasswordConfig::parse_cost(Some("3")), 10);
        assert_eq!(PasswordConfig::parse_cost(Some("32")), 10);
        assert_eq!(PasswordConfig::parse_cost(Some("abc")), 10);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
