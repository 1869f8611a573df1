//! Request gatekeeper — pass-through vs redirect for every page navigation.
//!
//! DESIGN
//! ======
//! The decision is a pure, total function of the request path and the
//! presence of the session cookie: every request yields exactly one of
//! pass-through, redirect-to-login, or redirect-to-home. The cookie value is
//! never parsed or validated here — the backend stays authoritative for
//! token validity; this gate only keeps signed-out browsers off protected
//! screens and signed-in ones off the auth screens. API and asset paths
//! bypass the gate entirely.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

/// Session-credential cookie set by the backend on login. Read-only here.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Target of the signed-out redirect.
pub const LOGIN_PATH: &str = "/login";

/// Target of the signed-in redirect off auth screens.
pub const HOME_PATH: &str = "/";

/// Paths reachable without a session credential. Matching is "equals or is
/// a sub-path of" on each entry.
const PUBLIC_PATHS: [&str; 5] = [
    "/login",
    "/signup",
    "/forgot-password",
    "/reset-password",
    "/verify-email",
];

/// Prefixes that bypass the gate entirely: the API surface and framework
/// asset paths.
const EXCLUDED_PREFIXES: [&str; 2] = ["/api", "/pkg"];

/// Exact paths that bypass the gate entirely.
const EXCLUDED_PATHS: [&str; 3] = ["/healthz", "/favicon.ico", "/robots.txt"];

/// Gate outcome. Every request maps to exactly one variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    PassThrough,
    RedirectToLogin,
    RedirectToHome,
}

/// True when `path` equals `prefix` or is a sub-path of it.
fn matches_prefix(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// True for requests the gate must not alter: API endpoints and static
/// assets.
#[must_use]
pub fn is_excluded(path: &str) -> bool {
    EXCLUDED_PATHS.contains(&path)
        || EXCLUDED_PREFIXES
            .iter()
            .any(|prefix| matches_prefix(path, prefix))
}

/// Classify `path` against the public allow-list.
#[must_use]
pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|prefix| matches_prefix(path, prefix))
}

/// Decide what to do with a page navigation. Pure and total.
///
/// An authenticated browser is bounced off the auth screens back home; a
/// signed-out one is bounced off protected screens to the login page. The
/// root path is the one protected-area path reachable without a credential —
/// the home page prompts for sign-in itself.
#[must_use]
pub fn decide(path: &str, has_credential: bool) -> Decision {
    match (has_credential, is_public(path)) {
        (true, true) => Decision::RedirectToHome,
        (true, false) | (false, true) => Decision::PassThrough,
        (false, false) if path == HOME_PATH => Decision::PassThrough,
        (false, false) => Decision::RedirectToLogin,
    }
}

/// Axum middleware applying [`decide`] to every inbound page request.
///
/// A cookie with an empty value counts as absent; the value is otherwise
/// never inspected.
pub async fn gatekeeper(jar: CookieJar, req: Request, next: Next) -> Response {
    let path = req.uri().path();
    if is_excluded(path) {
        return next.run(req).await;
    }

    let has_credential = jar
        .get(ACCESS_TOKEN_COOKIE)
        .map(Cookie::value)
        .is_some_and(|value| !value.is_empty());

    match decide(path, has_credential) {
        Decision::PassThrough => next.run(req).await,
        Decision::RedirectToLogin => Redirect::temporary(LOGIN_PATH).into_response(),
        Decision::RedirectToHome => Redirect::temporary(HOME_PATH).into_response(),
    }
}
