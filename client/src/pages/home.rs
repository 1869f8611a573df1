//! Home page with the trending catalog row.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route and the only protected-area path reachable
//! without a credential; anonymous visitors get the sign-in dialog instead
//! of a redirect.

use leptos::prelude::*;

use crate::components::media_card::MediaCard;
use crate::net::types::MediaSummary;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let trending = RwSignal::new(Vec::<MediaSummary>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    crate::util::auth::install_sign_in_prompt(auth, ui);

    // Fetch trending once the session probe settles so the bearer token, if
    // any, rides along.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let state = auth.get();
        if state.loading {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        {
            let token = state.token.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_trending(token.as_deref()).await {
                    Ok(items) => trending.set(items),
                    Err(e) => error.set(Some(e)),
                }
                loading.set(false);
            });
        }
    });

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Track everything you watch"</h1>
                <p>"Trending movies and TV shows, one watchlist."</p>
            </section>

            <section class="home-page__row">
                <h2>"Trending"</h2>
                <Show when=move || error.get().is_some()>
                    <p class="home-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p>"Loading trending titles..."</p> }
                >
                    <div class="home-page__cards">
                        {move || {
                            trending
                                .get()
                                .into_iter()
                                .map(|media| view! { <MediaCard media=media/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </section>
        </div>
    }
}
