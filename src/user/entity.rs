use serde::{Deserialize, Serialize};

/// An application user as exposed to the rendering layer.
///
/// # Overview
///
/// `User` is the value bound into the per-request rendering context so
/// templates can show "who is signed in". It deliberately carries only
/// presentation-relevant fields:
///
/// - `id`: the account identifier, or `None` for anonymous requests
/// - `display_name`: an optional human-readable name
///
/// Authorization decisions, roles, and domain status do **not** belong
/// here; they are the application's concern.
///
/// # Anonymous requests
///
/// Resolution always produces a `User` value. An unauthenticated request
/// is represented by [`User::anonymous`], a user whose `id` is `None`,
/// never by the absence of a value. Templates and handlers should test
/// [`User::is_anonymous`] instead of inspecting the `id` field directly.
///
/// # Typical Usage
///
/// ```rust
/// use pld_web::user::User;
///
/// let guest = User::anonymous();
/// assert!(guest.is_anonymous());
///
/// let alice = User::new("alice");
/// assert_eq!(alice.id.as_deref(), Some("alice"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account identifier. `None` represents "no authenticated user".
    pub id: Option<String>,
    /// Optional display name for templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl User {
    /// Creates a user with the given account identifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pld_web::user::User;
    ///
    /// let user = User::new("user-123");
    /// assert!(!user.is_anonymous());
    /// ```
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            display_name: None,
        }
    }

    /// Creates the anonymous placeholder user (`id: None`).
    ///
    /// Each call returns a fresh value; the request owns it and drops it
    /// when rendering finishes.
    pub fn anonymous() -> Self {
        Self {
            id: None,
            display_name: None,
        }
    }

    /// Sets the display name (builder style).
    ///
    /// ```rust
    /// use pld_web::user::User;
    ///
    /// let user = User::new("42").with_display_name("Alice");
    /// assert_eq!(user.display_name.as_deref(), Some("Alice"));
    /// ```
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Returns `true` when this value represents an unauthenticated
    /// request.
    pub fn is_anonymous(&self) -> bool {
        self.id.is_none()
    }
}
