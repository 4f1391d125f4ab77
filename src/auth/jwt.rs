//! # Authentication utilities (JWT)
//!
//! Pure JWT creation and decoding helpers. This module does **not**
//! access environment variables.
//!
//! ## Design principles
//! - No dependency on `std::env`
//! - No global state
//! - Fully testable with deterministic inputs
//!
//! The signing secret must be supplied by the caller (typically from
//! `AuthConfig`).

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Token lifetime applied by [`create_jwt`].
const TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims stored inside the token payload.
///
/// - `sub`: the authenticated subject (opaque at this layer)
/// - `exp`: expiration time (UNIX timestamp, seconds)
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject carried into [`Principal`](crate::auth::Principal).
    pub sub: String,
    /// Expiration timestamp (UTC, seconds since UNIX epoch).
    pub exp: usize,
}

/// Creates a signed JWT for the given subject.
///
/// ## Arguments
/// - `subject`: The authenticated subject to embed
/// - `secret`: HMAC secret used to sign the token
///
/// ## Errors
/// Returns an error if JWT encoding fails.
///
/// ## Example
/// ```
/// use pld_web::auth::jwt::create_jwt;
///
/// let token = create_jwt("alice", "test-secret").unwrap();
/// assert!(!token.is_empty());
/// ```
pub fn create_jwt(subject: &str, secret: &str) -> anyhow::Result<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(TOKEN_TTL_HOURS))
        .expect("invalid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: subject.to_string(),
        exp: expiration,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Decodes and validates a JWT token.
///
/// ## Errors
/// Returns an error if:
/// - The token is malformed
/// - The signature does not match
/// - The token is expired
///
/// ## Example
/// ```
/// use pld_web::auth::jwt::{create_jwt, decode_jwt};
///
/// let token = create_jwt("alice", "test-secret").unwrap();
/// let claims = decode_jwt(&token, "test-secret").unwrap();
///
/// assert_eq!(claims.sub, "alice");
/// ```
pub fn decode_jwt(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(decoded.claims)
}
