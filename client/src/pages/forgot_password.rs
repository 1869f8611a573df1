//! Forgot-password page requesting a reset email.

use leptos::prelude::*;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        if email_value.is_empty() {
            info.set("Enter your account email first.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Sending reset link...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::forgot_password(&email_value).await {
                Ok(message) => info.set(message),
                Err(e) => info.set(format!("Request failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page auth-page--forgot">
            <div class="auth-card">
                <h1>"Reset your password"</h1>
                <p class="auth-card__subtitle">
                    "Enter your email and we'll send a reset link."
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        "Send Reset Link"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__links">
                    <a href="/login">"Back to sign in"</a>
                </p>
            </div>
        </div>
    }
}
