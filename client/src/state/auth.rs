//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<AuthState>` context at the application root and
//! hydrated once on mount from cookie-backed API calls. Pages and components
//! read it to coordinate sign-in prompts and identity-dependent rendering.
//! The session cookie itself stays `HttpOnly`; only non-sensitive metadata
//! and the bearer token for API calls are held in memory.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user, the API bearer token,
/// and whether the initial session probe is still in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        // `loading` starts true so guards and dialogs wait for the session
        // probe instead of flashing a signed-out UI during hydration.
        Self { user: None, token: None, loading: true }
    }
}

impl AuthState {
    /// True once the session probe finished and found a signed-in user.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    /// True once the session probe finished with no user.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        !self.loading && self.user.is_none()
    }

    /// Record a completed session probe.
    pub fn resolve(&mut self, user: Option<User>, token: Option<String>) {
        self.user = user;
        self.token = token;
        self.loading = false;
    }

    /// Drop the in-memory session, typically on logout.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }
}
