//! # Current-User Middleware
//!
//! The per-request step that makes the resolved user available to the
//! rendering layer. Registered once at router construction; runs before
//! the handler so the `currentUser` binding exists by the time anything
//! renders.

use std::convert::Infallible;
use std::sync::Arc;

use axum::Extension;
use axum::extract::{FromRequestParts, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::error;

use crate::auth::extract::extract_principal;
use crate::config::auth::AuthConfig;
use crate::user::{CurrentUserResolver, User};
use crate::web::render_context::RenderContext;

/// Middleware that resolves the current user and binds it into the
/// request's [`RenderContext`].
///
/// # Overview
///
/// For every request:
///
/// 1. Extract the principal from the configured JWT cookie (absent on
///    anonymous requests)
/// 2. Run the [`CurrentUserResolver`]
/// 3. Bind the resulting user under
///    [`CURRENT_USER_KEY`](crate::web::render_context::CURRENT_USER_KEY)
/// 4. Continue the chain
///
/// A lookup failure is logged and answered with the framework-standard
/// `500 Internal Server Error`; the error itself is not translated or
/// retried. The anonymous path cannot fail.
///
/// # Wiring
///
/// The resolver and [`AuthConfig`] are injected via `Extension` layers,
/// applied **after** the middleware so they are visible to it:
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use axum::{Extension, Router, middleware, routing::get};
/// use pld_web::config::auth::AuthConfig;
/// use pld_web::user::CurrentUserResolver;
/// use pld_web::web::current_user::{CurrentUser, resolve_current_user};
///
/// async fn home(CurrentUser(user): CurrentUser) -> String {
///     user.id.unwrap_or_else(|| "guest".into())
/// }
///
/// fn app(resolver: Arc<CurrentUserResolver>, auth: AuthConfig) -> Router {
///     Router::new()
///         .route("/", get(home))
///         .layer(middleware::from_fn(resolve_current_user))
///         .layer(Extension(resolver))
///         .layer(Extension(auth))
/// }
/// ```
pub async fn resolve_current_user(
    Extension(resolver): Extension<Arc<CurrentUserResolver>>,
    Extension(auth): Extension<AuthConfig>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let principal = extract_principal(&jar, auth.jwt_secret.as_deref(), &auth.cookie_name);

    let user = match resolver.resolve(principal.as_ref()).await {
        Ok(user) => user,
        Err(err) => {
            error!("current user lookup failed: {err:#}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let mut ctx = req
        .extensions()
        .get::<RenderContext>()
        .cloned()
        .unwrap_or_default();
    if let Err(err) = ctx.set_current_user(&user) {
        error!("failed to bind current user: {err:#}");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    req.extensions_mut().insert(ctx);

    next.run(req).await
}

/// Handler-side extractor for the resolved user.
///
/// Reads the `currentUser` binding back out of the request's
/// [`RenderContext`]. Infallible: a request that never passed through
/// [`resolve_current_user`] extracts as the anonymous user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<RenderContext>()
            .map(|ctx| ctx.current_user())
            .unwrap_or_else(User::anonymous);

        Ok(Self(user))
    }
}
