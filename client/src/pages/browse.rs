//! Browse page with catalog search and a paged result grid.

use leptos::prelude::*;

use crate::components::media_card::MediaCard;
use crate::net::types::{MediaSummary, Page};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn BrowsePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let query = RwSignal::new(String::new());
    let results = RwSignal::new(None::<Page<MediaSummary>>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    crate::util::auth::install_sign_in_prompt(auth, ui);

    let run_search = move |page: u32| {
        let query_value = query.get_untracked().trim().to_owned();
        if query_value.is_empty() {
            error.set(Some("Enter something to search for.".to_owned()));
            return;
        }
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let token = auth.get_untracked().token;
            leptos::task::spawn_local(async move {
                match crate::net::api::search(&query_value, page, token.as_deref()).await {
                    Ok(page_results) => results.set(Some(page_results)),
                    Err(e) => error.set(Some(e)),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = page;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        run_search(1);
    };

    let on_prev = move |_| {
        let current = results.get_untracked().map_or(1, |p| p.page);
        if current > 1 {
            run_search(current - 1);
        }
    };

    let on_next = move |_| {
        if let Some(page) = results.get_untracked() {
            if page.page < page.total_pages {
                run_search(page.page + 1);
            }
        }
    };

    let page_label = move || {
        results
            .get()
            .map_or_else(String::new, |p| format!("Page {} of {}", p.page, p.total_pages.max(1)))
    };

    view! {
        <div class="browse-page">
            <form class="browse-page__search" on:submit=on_submit>
                <input
                    class="browse-page__input"
                    type="search"
                    placeholder="Search movies and TV shows"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                    "Search"
                </button>
            </form>

            <Show when=move || error.get().is_some()>
                <p class="browse-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || loading.get()>
                <p>"Searching..."</p>
            </Show>

            <Show when=move || results.get().is_some()>
                <div class="browse-page__grid">
                    {move || {
                        results
                            .get()
                            .map(|p| p.results)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|media| view! { <MediaCard media=media/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <div class="browse-page__pager">
                    <button class="btn" on:click=on_prev disabled=move || loading.get()>
                        "Previous"
                    </button>
                    <span class="browse-page__page">{page_label}</span>
                    <button class="btn" on:click=on_next disabled=move || loading.get()>
                        "Next"
                    </button>
                </div>
            </Show>
        </div>
    }
}
