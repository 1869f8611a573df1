//! Reset-password page consuming the token from the emailed link.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    // Token comes from the `?token=` query parameter on the emailed link.
    // Absence is a rendered error, not a crash.
    let token = move || query.read().get("token").filter(|t| !t.is_empty());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(token_value) = token() else {
            info.set("Invalid or missing reset token".to_owned());
            return;
        };
        let password_value = password.get();
        if password_value.is_empty() {
            info.set("Enter a new password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Updating password...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::reset_password(&token_value, &password_value).await {
                Ok(message) => {
                    info.set(message);
                    done.set(true);
                }
                Err(e) => {
                    info.set(format!("Reset failed: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page auth-page--reset">
            <div class="auth-card">
                <h1>"Choose a new password"</h1>
                <Show
                    when=move || token().is_some()
                    fallback=|| {
                        view! {
                            <p class="auth-message auth-message--error">
                                "Invalid or missing reset token"
                            </p>
                            <p class="auth-card__links">
                                <a href="/forgot-password">"Request a new link"</a>
                            </p>
                        }
                    }
                >
                    <Show
                        when=move || !done.get()
                        fallback=move || {
                            view! {
                                <p class="auth-message auth-message--success">{move || info.get()}</p>
                                <p class="auth-card__links">
                                    <a href="/login">"Sign in"</a>
                                </p>
                            }
                        }
                    >
                        <form class="auth-form" on:submit=on_submit>
                            <input
                                class="auth-input"
                                type="password"
                                placeholder="New password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                                "Update Password"
                            </button>
                        </form>
                        <Show when=move || !info.get().is_empty()>
                            <p class="auth-message">{move || info.get()}</p>
                        </Show>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
