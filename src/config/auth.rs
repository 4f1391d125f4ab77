//! # Authentication Configuration
//!
//! Configuration for request-identity extraction: the JWT verification
//! secret and the cookie that carries the token.
//!
//! The configuration reads from environment variables:
//! - `JWT_SECRET`: HMAC secret used to verify tokens. When absent, every
//!   request is treated as anonymous.
//! - `AUTH_COOKIE_NAME`: cookie holding the JWT (default: `"auth_token"`)
//!
//! # Examples
//! ```rust
//! use pld_web::config::auth::AuthConfig;
//!
//! let cfg = AuthConfig::from_env_with(|_| None);
//! assert_eq!(cfg.cookie_name, "auth_token");
//! assert!(!cfg.is_enabled());
//! ```

use crate::config::env::{read_string_from, read_string_opt_from};

/// Default cookie name holding the JWT.
pub const DEFAULT_AUTH_COOKIE_NAME: &str = "auth_token";

/// Configuration for per-request identity extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// JWT verification secret. `None` disables principal extraction.
    pub jwt_secret: Option<String>,
    /// Name of the cookie that carries the JWT.
    pub cookie_name: String,
}

impl AuthConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment variables
    /// - `JWT_SECRET`
    /// - `AUTH_COOKIE_NAME`
    pub fn from_env() -> Self {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Loads configuration using a custom key provider (for
    /// testing/mocking).
    pub fn from_env_with<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = read_string_opt_from(&get, "JWT_SECRET");
        let cookie_name = read_string_from(&get, "AUTH_COOKIE_NAME", DEFAULT_AUTH_COOKIE_NAME);

        Self {
            jwt_secret,
            cookie_name,
        }
    }

    /// Returns `true` if identity extraction is active.
    ///
    /// Extraction is considered **enabled** when a `JWT_SECRET` was
    /// provided. Without it, every request resolves as anonymous.
    pub fn is_enabled(&self) -> bool {
        self.jwt_secret.is_some()
    }
}
