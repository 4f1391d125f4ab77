//! # Askama Template Rendering Helpers
//!
//! Utility functions for rendering [Askama](https://crates.io/crates/askama)
//! templates into [Axum](https://crates.io/crates/axum) HTML responses.
//!
//! This is the consumption end of the rendering context: handlers pull
//! their bindings (typically the current user) out of
//! [`RenderContext`](crate::web::render_context::RenderContext), build a
//! typed template, and hand it to these helpers.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

/// Renders an Askama template into an HTML response.
///
/// On success, returns `200 OK` with content type `text/html`.
/// On render failure, logs the error and returns
/// `500 Internal Server Error`.
///
/// # Example
/// ```rust,no_run
/// use askama::Template;
/// use pld_web::user::User;
/// use pld_web::web::template::render_template;
///
/// #[derive(Template)]
/// #[template(source = "<p>{{ name }}</p>", ext = "html")]
/// struct Hello { name: String }
///
/// let resp = render_template(Hello { name: "World".into() });
/// assert_eq!(resp.status(), axum::http::StatusCode::OK);
/// ```
pub fn render_template<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!("template render failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Renders an Askama template with a custom HTTP status code.
///
/// Renders via [`render_template`], then replaces the status code with
/// the given one.
pub fn render_template_with_status<T: Template>(template: T, status: StatusCode) -> Response {
    let mut resp = render_template(template);
    *resp.status_mut() = status;
    resp
}
