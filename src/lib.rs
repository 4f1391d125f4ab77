//! # pld_web
//!
//! Common web foundation library for dashboard-style applications.
//!
//! This crate provides request-scoped infrastructure glue such as:
//! - Current-user resolution for template rendering (`user`, `web`)
//! - JWT-based principal extraction from request cookies (`auth`)
//! - Environment-driven configuration (`config`)
//!
//! ## Example usage (in another crate)
//!
//! ```rust
//! use pld_web::anyhow::Result;
//! use pld_web::user::CurrentUserResolver;
//! ```
// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use askama;
pub use axum;
pub use axum_extra;
pub use chrono;
pub use dotenvy;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tower;
pub use tower_http;

// ===============================
// Public modules
// ===============================
pub mod auth;
pub mod config;
pub mod error;
pub mod user;
pub mod web;
