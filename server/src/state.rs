//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the reusable upstream HTTP client and the backend origin for the
//! `/api` proxy. There is no database and no cross-request mutable state —
//! the edge is stateless by construction.

use reqwest::Client;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Upstream HTTP client, reused across proxied requests.
    pub http: Client,
    /// Backend origin for the `/api` surface (e.g. `https://api.example.com`).
    /// `None` disables the proxy.
    pub api_origin: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new(api_origin: Option<String>) -> Self {
        Self { http: Client::new(), api_origin }
    }
}
