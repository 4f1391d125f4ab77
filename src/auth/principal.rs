/// The authenticated identity supplied for the current request.
///
/// # Overview
///
/// `Principal` represents the *result of authentication*, not a domain
/// user. It deliberately does **not** contain application-specific
/// concepts such as:
///
/// - user / member / admin
/// - roles or permissions
/// - profile or account status
///
/// It only carries the authenticated **subject**, leaving all
/// interpretation to the user lookup layer. A request with no `Principal`
/// is an anonymous request.
///
/// # Typical Usage
///
/// ```rust
/// use pld_web::auth::Principal;
///
/// let principal = Principal::new("alice");
/// assert_eq!(principal.subject, "alice");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Principal {
    /// The authenticated subject.
    ///
    /// Its semantic meaning is intentionally undefined at this layer.
    /// The lookup layer decides whether it is a user ID, member ID, or
    /// something else.
    pub subject: String,
}

impl Principal {
    /// Creates a `Principal` from an authenticated subject.
    ///
    /// Performs no validation and does not interpret the subject.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_principal_from_str() {
        let principal = Principal::new("alice");

        assert_eq!(principal.subject, "alice");
    }

    #[test]
    fn creates_principal_from_owned_string() {
        let subject = String::from("member-42");
        let principal = Principal::new(subject.clone());

        assert_eq!(principal.subject, subject);
    }

    #[test]
    fn principal_does_not_interpret_subject() {
        let principal = Principal::new("admin:999");

        assert_eq!(principal.subject, "admin:999");
    }

    #[test]
    fn principal_is_cloneable() {
        let principal = Principal::new("abc");
        let cloned = principal.clone();

        assert_eq!(principal, cloned);
    }
}
