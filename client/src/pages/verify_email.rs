//! Email-verification page: consume the emailed token, then count down and
//! redirect home.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page reads the `token` query parameter from its own URL. A missing
//! token is a rendered error and never issues a network call. On success a
//! three-second countdown runs on an explicit interval scoped to the view;
//! teardown drops the interval so a stale tick never acts on an unmounted
//! page. The final navigation is a full-page redirect, not a soft
//! transition.

#[cfg(test)]
#[path = "verify_email_test.rs"]
mod verify_email_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::util::countdown;

/// Error shown when the link carries no usable token.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or missing verification token";

/// Visual state of the verification flow.
#[derive(Clone, Debug, PartialEq)]
enum VerifyStatus {
    Loading,
    Success(String),
    Error(String),
}

/// Validate the raw query-parameter value. Empty and whitespace-only tokens
/// count as missing.
fn token_or_error(raw: Option<String>) -> Result<String, String> {
    match raw {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(INVALID_TOKEN_MESSAGE.to_owned()),
    }
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let query = use_query_map();

    let status = RwSignal::new(VerifyStatus::Loading);
    let remaining = RwSignal::new(countdown::REDIRECT_DELAY_SECONDS);

    // Kick off verification exactly once per mount.
    let started = RwSignal::new(false);
    Effect::new(move || {
        if started.get() {
            return;
        }
        started.set(true);

        match token_or_error(query.get_untracked().get("token")) {
            Err(message) => status.set(VerifyStatus::Error(message)),
            Ok(token) => {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match crate::net::api::verify_email(&token).await {
                        Ok(resp) => status.set(VerifyStatus::Success(resp.message)),
                        Err(e) => status.set(VerifyStatus::Error(e)),
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = token;
                }
            }
        }
    });

    // Start the redirect countdown when verification succeeds. The interval
    // handle lives in the view's scope and is dropped on teardown.
    #[cfg(feature = "hydrate")]
    {
        let redirect_tick = Rc::new(RefCell::new(None::<gloo_timers::callback::Interval>));
        let tick_cell = Rc::clone(&redirect_tick);
        Effect::new(move || {
            if !matches!(status.get(), VerifyStatus::Success(_)) {
                return;
            }
            if tick_cell.borrow().is_some() {
                return;
            }
            let tick = gloo_timers::callback::Interval::new(1000, move || {
                let next = countdown::tick(remaining.get_untracked());
                remaining.set(next);
                if countdown::is_done(next) {
                    // Full-page navigation; stale ticks cannot touch the
                    // already-navigated page.
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
            });
            *tick_cell.borrow_mut() = Some(tick);
        });
        on_cleanup(move || {
            redirect_tick.borrow_mut().take();
        });
    }

    view! {
        <div class="verify-page">
            <div class="verify-card">
                <h1>"Email Verification"</h1>
                {move || match status.get() {
                    VerifyStatus::Loading => view! {
                        <p class="verify-card__status">"Verifying your email..."</p>
                    }
                    .into_any(),
                    VerifyStatus::Success(message) => view! {
                        <p class="verify-card__status verify-card__status--success">{message}</p>
                        <p class="verify-card__countdown">
                            {move || countdown::redirect_message(remaining.get())}
                        </p>
                    }
                    .into_any(),
                    VerifyStatus::Error(message) => view! {
                        <p class="verify-card__status verify-card__status--error">{message}</p>
                        <p class="verify-card__links">
                            <a href="/">"Back to home"</a>
                        </p>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
