//! Signup page creating an account that still needs email verification.

use leptos::prelude::*;

#[component]
pub fn SignupPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if name_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            info.set("Fill in name, email, and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&name_value, &email_value, &password_value).await {
                Ok(message) => {
                    info.set(message);
                    done.set(true);
                }
                Err(e) => {
                    info.set(format!("Signup failed: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page auth-page--signup">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <Show
                    when=move || !done.get()
                    fallback=move || {
                        view! {
                            <p class="auth-message auth-message--success">{move || info.get()}</p>
                            <p class="auth-card__links">
                                <a href="/login">"Back to sign in"</a>
                            </p>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_submit>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                            "Sign Up"
                        </button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="auth-message">{move || info.get()}</p>
                    </Show>
                    <p class="auth-card__links">
                        "Already registered? "
                        <a href="/login">"Sign in"</a>
                    </p>
                </Show>
            </div>
        </div>
    }
}
