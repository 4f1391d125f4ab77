//! # Application Configuration Loader
//!
//! Provides a unified configuration loader for application settings.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! This configuration is typically initialized once at application startup
//! and shared throughout the system.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `JWT_SECRET` | Secret for verifying auth cookies | *none* (anonymous only) |
//! | `AUTH_COOKIE_NAME` | Cookie holding the JWT | `"auth_token"` |
//!
//! # Example
//! ```rust,no_run
//! use pld_web::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env();
//! if cfg.auth.is_enabled() {
//!     println!("request identity extraction is active");
//! }
//! ```

use std::env;

use crate::config::auth::AuthConfig;

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Request-identity extraction configuration.
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported environment variables and falls back to
    ///   defaults.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        AppConfig {
            auth: AuthConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_env;

    #[test]
    fn from_env_includes_auth_config() {
        temp_env::with_vars(
            vec![
                ("APP_ENV", Some("production")),
                ("JWT_SECRET", Some("super-secret-key")),
            ],
            || {
                let cfg = AppConfig::from_env();
                assert_eq!(cfg.auth.jwt_secret.as_deref(), Some("super-secret-key"));
                assert!(cfg.auth.is_enabled());
            },
        );
    }

    #[test]
    fn auth_is_disabled_when_secret_is_missing() {
        temp_env::with_vars(
            vec![
                ("APP_ENV", Some("production")),
                ("JWT_SECRET", None::<&str>),
            ],
            || {
                let cfg = AppConfig::from_env();
                assert!(
                    !cfg.auth.is_enabled(),
                    "Expected identity extraction to be disabled without JWT_SECRET"
                );
            },
        );
    }
}
