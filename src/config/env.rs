//! # Environment Variable Utilities
//!
//! Helpers for reading string-valued environment variables with trimming
//! and fallback defaults. Used by configuration loading (e.g.
//! `AuthConfig`).
//!
//! # Examples
//! ```rust,no_run
//! use pld_web::config::env::{read_string, read_string_opt};
//!
//! let cookie = read_string("AUTH_COOKIE_NAME", "auth_token");
//! let secret = read_string_opt("JWT_SECRET");
//! ```

/// Reads a string from an environment variable, falling back to the
/// given default when the variable is missing or blank.
pub fn read_string(name: &str, default: &str) -> String {
    read_string_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a string using a custom provider function.
///
/// Useful for testing or mocking environment sources.
///
/// # Example
/// ```rust
/// use pld_web::config::env::read_string_from;
///
/// let val = read_string_from(|_| Some("  session  ".into()), "COOKIE", "auth_token");
/// assert_eq!(val, "session");
/// ```
pub fn read_string_from<F>(provider: F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    read_string_opt_from(provider, name).unwrap_or_else(|| default.to_string())
}

/// Reads an optional string from an environment variable.
///
/// Values are trimmed; a blank value reads as absent.
pub fn read_string_opt(name: &str) -> Option<String> {
    read_string_opt_from(|k| std::env::var(k).ok(), name)
}

/// Reads an optional string using a custom provider function.
pub fn read_string_opt_from<F>(provider: F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = provider(name)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_string_uses_value_when_present() {
        let got = read_string_from(|_| Some("session".into()), "X", "auth_token");
        assert_eq!(got, "session");
    }

    #[test]
    fn test_read_string_default_when_missing() {
        let got = read_string_from(|_| None, "X", "auth_token");
        assert_eq!(got, "auth_token");
    }

    #[test]
    fn test_read_string_default_when_blank() {
        let got = read_string_from(|_| Some("   ".into()), "X", "auth_token");
        assert_eq!(got, "auth_token");
    }

    #[test]
    fn test_read_string_trims_whitespace() {
        let got = read_string_from(|_| Some("  session \n".into()), "X", "auth_token");
        assert_eq!(got, "session");
    }

    #[test]
    fn test_read_string_opt_variants() {
        assert_eq!(
            read_string_opt_from(|_| Some("secret".into()), "X"),
            Some("secret".to_string())
        );
        assert_eq!(read_string_opt_from(|_| Some("".into()), "X"), None);
        assert_eq!(read_string_opt_from(|_| Some("  ".into()), "X"), None);
        assert_eq!(read_string_opt_from(|_| None, "X"), None);
    }
}
