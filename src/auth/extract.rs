use axum_extra::extract::cookie::CookieJar;

use crate::auth::jwt::decode_jwt;
use crate::auth::principal::Principal;

/// Extracts the authenticated [`Principal`] from a request's cookies.
///
/// The cookie value is expected to be the raw JWT issued at sign-in.
/// Cookie name and signing secret are supplied by the caller (typically
/// from `AuthConfig`).
///
/// Returns `None` (an anonymous request) when:
///
/// - no secret is configured,
/// - the cookie is missing, or
/// - the token fails validation (malformed, bad signature, expired).
///
/// Token *issuance* is out of scope here; this function only consumes
/// tokens something else created.
pub fn extract_principal(
    jar: &CookieJar,
    jwt_secret: Option<&str>,
    cookie_name: &str,
) -> Option<Principal> {
    let secret = jwt_secret?;

    jar.get(cookie_name)
        .and_then(|cookie| decode_jwt(cookie.value(), secret).ok())
        .map(|claims| Principal::new(claims.sub))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::{Cookie, CookieJar};

    use crate::auth::jwt::create_jwt;

    const JWT_SECRET: &str = "unit-test-secret";
    const COOKIE_NAME: &str = "auth_token";

    fn empty_jar() -> CookieJar {
        CookieJar::new()
    }

    #[test]
    fn returns_none_when_secret_is_missing() {
        let jar = empty_jar();

        let result = extract_principal(&jar, None, COOKIE_NAME);

        assert!(result.is_none());
    }

    #[test]
    fn returns_none_when_cookie_is_missing() {
        let jar = empty_jar();

        let result = extract_principal(&jar, Some(JWT_SECRET), COOKIE_NAME);

        assert!(result.is_none());
    }

    #[test]
    fn returns_none_when_token_is_invalid() {
        let jar = CookieJar::new().add(Cookie::new(COOKIE_NAME, "invalid.jwt.token"));

        let result = extract_principal(&jar, Some(JWT_SECRET), COOKIE_NAME);

        assert!(result.is_none());
    }

    #[test]
    fn returns_none_when_token_was_signed_with_another_secret() {
        let token = create_jwt("alice", "some-other-secret").unwrap();
        let jar = CookieJar::new().add(Cookie::new(COOKIE_NAME, token));

        let result = extract_principal(&jar, Some(JWT_SECRET), COOKIE_NAME);

        assert!(result.is_none());
    }

    #[test]
    fn returns_principal_when_token_is_valid() {
        let token = create_jwt("alice", JWT_SECRET).unwrap();
        let jar = CookieJar::new().add(Cookie::new(COOKIE_NAME, token));

        let result = extract_principal(&jar, Some(JWT_SECRET), COOKIE_NAME);

        assert_eq!(result, Some(Principal::new("alice")));
    }

    #[test]
    fn respects_configured_cookie_name() {
        let token = create_jwt("alice", JWT_SECRET).unwrap();
        let jar = CookieJar::new().add(Cookie::new("other_cookie", token));

        let result = extract_principal(&jar, Some(JWT_SECRET), COOKIE_NAME);

        assert!(result.is_none());
    }
}
