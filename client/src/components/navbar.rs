//! Top navigation chrome shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the auth context for the identity section and the UI context for the
//! theme toggle and sign-in dialog trigger. Logout is a full-page navigation
//! so the next request re-enters through the edge gatekeeper.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let user_name = move || {
        auth.get()
            .user
            .map_or_else(String::new, |u| u.name)
    };

    let on_sign_in = move |_| {
        ui.update(|u| u.auth_dialog_open = true);
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(AuthState::clear);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">"Reeldeck"</a>
            <nav class="navbar__links">
                <a class="navbar__link" href="/browse">"Browse"</a>
            </nav>

            <span class="navbar__spacer"></span>

            <button
                class="btn navbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <Show
                when=move || auth.get().is_authenticated()
                fallback=move || {
                    view! {
                        <button class="btn navbar__sign-in" on:click=on_sign_in>
                            "Sign In"
                        </button>
                    }
                }
            >
                <span class="navbar__self">{user_name}</span>
                <button class="btn navbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
