use actix_web::cookie::{time::OffsetDateTime, Cookie, CookieBuilder, SameSite};

use crate::options::COOKIE_SECURE;

/// Builds an http-only cookie carrying a session token.
pub fn build_session_cookie<'c>(name: &'c str, session: &'c str) -> CookieBuilder<'c> {
    let secure = *COOKIE_SECURE;

    Cookie::build(name, session)
        // disallow js access
        .http_only(true)
        // send on every route, the api is not mounted under a common prefix
        .path("/")
        .secure(secure)
        // a frontend on another origin can only send the cookie with SameSite=None,
        // which browsers only accept on secure cookies
        .same_site(if secure { SameSite::None } else { SameSite::Lax })
}

/// A cookie that makes the browser drop the named session cookie.
pub fn death_cookie(name: &str) -> Cookie<'_> {
    build_session_cookie(name, "NO_SESSION_DELETE_ME")
        .expires(OffsetDateTime::UNIX_EPOCH)
        .finish()
}
