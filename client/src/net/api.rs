//! REST API helpers for communicating with the backend service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! catalog fetch failures degrade to rendered error states without crashing
//! hydration. The backend is authoritative for token validity; nothing here
//! inspects credentials beyond forwarding them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{MediaSummary, MovieDetail, Page, TvDetail, User, VerifyEmailResponse};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
fn movie_endpoint(id: i64) -> String {
    format!("/api/movies/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn tv_endpoint(id: i64) -> String {
    format!("/api/tv/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn search_endpoint(query: &str, page: u32) -> String {
    format!("/api/search?query={query}&page={page}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_failed_message(status: u16) -> String {
    format!("signup failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_failed_message(status: u16) -> String {
    format!("verification failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Error body shape the backend uses for non-2xx responses.
#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the session's API bearer token from `/api/auth/session-token`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_session_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/session-token")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        #[derive(Deserialize)]
        struct TokenResponse {
            token: String,
        }
        let body: TokenResponse = resp.json().await.ok()?;
        Some(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /api/auth/login`. The backend sets the session cookie
/// on success; the returned [`User`] reflects the new session.
///
/// # Errors
///
/// Returns the backend's error message, or a generic status message if the
/// body is not parseable.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let message = resp.json::<ErrorBody>().await.ok().map(|b| b.message);
            return Err(message.unwrap_or_else(|| login_failed_message(status)));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/signup`. Returns the backend's
/// confirmation message; the account still needs email verification.
///
/// # Errors
///
/// Returns the backend's error message, or a generic status message if the
/// body is not parseable.
pub async fn signup(name: &str, email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let message = resp.json::<ErrorBody>().await.ok().map(|b| b.message);
            return Err(message.unwrap_or_else(|| signup_failed_message(status)));
        }
        #[derive(Deserialize)]
        struct SignupResponse {
            message: String,
        }
        let body: SignupResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Request a password-reset email via `POST /api/auth/forgot-password`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn forgot_password(email: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/forgot-password")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        #[derive(Deserialize)]
        struct ForgotResponse {
            message: String,
        }
        let body: ForgotResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// Set a new password via `POST /api/auth/reset-password` using the token
/// from the reset email link.
///
/// # Errors
///
/// Returns the backend's error message, or a generic status message if the
/// body is not parseable.
pub async fn reset_password(token: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "token": token, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/reset-password")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let message = resp.json::<ErrorBody>().await.ok().map(|b| b.message);
            return Err(message.unwrap_or_else(|| request_failed_message(status)));
        }
        #[derive(Deserialize)]
        struct ResetResponse {
            message: String,
        }
        let body: ResetResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, password);
        Err("not available on server".to_owned())
    }
}

/// Verify an email address via `POST /api/auth/verify-email` using the token
/// from the verification email link.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the token is rejected.
pub async fn verify_email(token: &str) -> Result<VerifyEmailResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "token": token });
        let resp = gloo_net::http::Request::post("/api/auth/verify-email")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let message = resp.json::<ErrorBody>().await.ok().map(|b| b.message);
            return Err(message.unwrap_or_else(|| verify_failed_message(status)));
        }
        resp.json::<VerifyEmailResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch the trending row for the home page from `/api/trending`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_trending(token: Option<&str>) -> Result<Vec<MediaSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get("/api/trending");
        if let Some(token) = token {
            req = req.header("Authorization", &bearer_value(token));
        }
        let resp = req.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        let body: Page<MediaSummary> = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.results)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch one movie's detail payload from `/api/movies/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_movie(id: i64, token: Option<&str>) -> Result<MovieDetail, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = movie_endpoint(id);
        let mut req = gloo_net::http::Request::get(&url);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer_value(token));
        }
        let resp = req.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<MovieDetail>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, token);
        Err("not available on server".to_owned())
    }
}

/// Fetch one TV show's detail payload from `/api/tv/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_tv(id: i64, token: Option<&str>) -> Result<TvDetail, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = tv_endpoint(id);
        let mut req = gloo_net::http::Request::get(&url);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer_value(token));
        }
        let resp = req.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<TvDetail>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, token);
        Err("not available on server".to_owned())
    }
}

/// Search the catalog via `/api/search?query=...&page=...`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn search(query: &str, page: u32, token: Option<&str>) -> Result<Page<MediaSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = search_endpoint(query, page);
        let mut req = gloo_net::http::Request::get(&url);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer_value(token));
        }
        let resp = req.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<Page<MediaSummary>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (query, page, token);
        Err("not available on server".to_owned())
    }
}
