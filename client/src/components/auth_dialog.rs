//! Modal sign-in dialog shown to signed-out visitors.
//!
//! DESIGN
//! ======
//! Pages decide when the dialog appears; the dialog owns the credential form
//! and updates the shared auth context on success. Backdrop click and Escape
//! both close it, matching the other modal surfaces.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Modal email/password sign-in dialog with a link out to signup.
#[component]
pub fn AuthDialog(on_cancel: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            info.set("Enter both email and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(user) => {
                    let token = crate::net::api::fetch_session_token().await;
                    auth.update(|a| a.resolve(Some(user), token));
                    on_cancel.run(());
                }
                Err(e) => {
                    info.set(format!("Sign in failed: {e}"));
                    busy.set(false);
                }
            }
        });
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(()) on:keydown=on_keydown>
            <div class="dialog dialog--auth" on:click=move |ev| ev.stop_propagation()>
                <h2>"Sign In"</h2>
                <p class="dialog__subtitle">"Sign in to track what you watch."</p>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__message">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Sign In"
                    </button>
                </div>
                <p class="dialog__footer">
                    "No account? "
                    <a href="/signup">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
