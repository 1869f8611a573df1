//! Reverse proxy for the backend API surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser talks to `/api/...` on this host; the edge forwards those
//! requests verbatim to the configured backend origin and relays the answer.
//! Cookies and authorization headers ride along untouched — the backend is
//! authoritative for all auth decisions on this surface.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Cap on buffered request bodies forwarded upstream.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Failures while relaying a request upstream.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("API origin is not configured")]
    NotConfigured,
    #[error("request body unreadable or too large")]
    Body,
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Error body shape shared with the frontend's API client.
#[derive(Debug, serde::Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Body => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        tracing::warn!(error = %self, "api proxy error");
        (status, axum::Json(ErrorBody { message: self.to_string() })).into_response()
    }
}

/// Headers that are connection-scoped and must not be forwarded in either
/// direction.
fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
            | "host"
    )
}

/// Join the configured origin with the incoming path and query.
fn upstream_url(origin: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", origin.trim_end_matches('/'))
}

/// Copy forwardable headers out of `source`.
fn forwardable_headers(source: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in source {
        if !is_hop_by_hop(name) {
            headers.append(name.clone(), value.clone());
        }
    }
    headers
}

/// `ANY /api/{*path}` — relay the request to the backend origin.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let Some(origin) = state.api_origin.clone() else {
        return Err(ProxyError::NotConfigured);
    };

    let method = req.method().clone();
    let path_and_query = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_owned(), |pq| pq.as_str().to_owned());
    let url = upstream_url(&origin, &path_and_query);
    let headers = forwardable_headers(req.headers());

    let body = to_bytes(req.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|_| ProxyError::Body)?;

    let upstream = state
        .http
        .request(method, url)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let response_headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;

    Ok((status, response_headers, bytes).into_response())
}
