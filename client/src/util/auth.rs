//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical signed-out prompting behavior.
//! The edge gatekeeper already bounces direct navigation to protected paths;
//! this covers client-side route transitions, which never touch the server.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// True when the session probe finished and found nobody signed in.
#[must_use]
pub fn should_prompt_sign_in(state: &AuthState) -> bool {
    state.is_anonymous()
}

/// Open the sign-in dialog once, whenever auth has loaded and no user is
/// present. Runs as an effect scoped to the calling component.
pub fn install_sign_in_prompt(auth: RwSignal<AuthState>, ui: RwSignal<UiState>) {
    let prompted = RwSignal::new(false);
    Effect::new(move || {
        if prompted.get() {
            return;
        }
        if should_prompt_sign_in(&auth.get()) {
            prompted.set(true);
            ui.update(|u| u.auth_dialog_open = true);
        }
    });
}
