//! # Per-Request Rendering Context
//!
//! Key/value bindings made available to the view layer for a single
//! request. The context travels in request extensions: middleware
//! populates it, handlers read it back (directly or through extractors)
//! when building their templates.
//!
//! The one binding this crate manages itself is the current user, stored
//! under [`CURRENT_USER_KEY`].

use std::collections::HashMap;
use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde_json::Value;

use crate::user::User;

/// Binding name under which the resolved user is exposed to views.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Per-request key/value bindings for the view layer.
///
/// # Overview
///
/// `RenderContext` carries named JSON values from the request pipeline to
/// whatever renders the response. It is constructed fresh per request,
/// owned by that request, and dropped with it.
///
/// # Current user
///
/// [`RenderContext::current_user`] never returns an absent result: when
/// the binding is missing or malformed it falls back to the anonymous
/// placeholder, so view code can always rely on having a `User` value.
///
/// # Extractor
///
/// The context can be extracted in any handler; a request that never
/// passed through the populating middleware yields an empty context
/// (and therefore an anonymous current user).
#[derive(Clone, Debug, Default)]
pub struct RenderContext {
    bindings: HashMap<String, Value>,
}

impl RenderContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a named binding, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.bindings.insert(key.into(), value);
    }

    /// Returns a binding by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.bindings.get(key)
    }

    /// Binds the given user under [`CURRENT_USER_KEY`].
    ///
    /// ## Errors
    /// Returns an error if the user cannot be serialized.
    pub fn set_current_user(&mut self, user: &User) -> anyhow::Result<()> {
        let value = serde_json::to_value(user)?;
        self.insert(CURRENT_USER_KEY, value);
        Ok(())
    }

    /// Returns the current user bound into this context.
    ///
    /// Falls back to [`User::anonymous`] when the binding is missing or
    /// malformed, so callers always receive a value.
    pub fn current_user(&self) -> User {
        self.get(CURRENT_USER_KEY)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_else(User::anonymous)
    }
}

impl<S> FromRequestParts<S> for RenderContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RenderContext>()
            .cloned()
            .unwrap_or_default())
    }
}
