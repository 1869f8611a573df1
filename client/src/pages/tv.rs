//! TV show detail page keyed by the `:id` route parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::TvDetail;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Visual state of the detail fetch.
#[derive(Clone, Debug, PartialEq)]
enum DetailStatus {
    Loading,
    Ready(Box<TvDetail>),
    Error(String),
}

#[component]
pub fn TvPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();

    let status = RwSignal::new(DetailStatus::Loading);

    crate::util::auth::install_sign_in_prompt(auth, ui);

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

        let Some(id) = params.read().get("id").and_then(|raw| raw.parse::<i64>().ok()) else {
            status.set(DetailStatus::Error("Unknown TV show.".to_owned()));
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let token = state.token.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_tv(id, token.as_deref()).await {
                    Ok(detail) => status.set(DetailStatus::Ready(Box::new(detail))),
                    Err(e) => status.set(DetailStatus::Error(e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="detail-page detail-page--tv">
            {move || match status.get() {
                DetailStatus::Loading => view! { <p>"Loading..."</p> }.into_any(),
                DetailStatus::Error(message) => view! {
                    <div class="detail-page__error">
                        <p>{message}</p>
                        <a href="/">"Back to home"</a>
                    </div>
                }
                .into_any(),
                DetailStatus::Ready(detail) => {
                    let genres = detail
                        .genres
                        .iter()
                        .map(|g| g.name.clone())
                        .collect::<Vec<_>>()
                        .join(", ");
                    let has_genres = !genres.is_empty();
                    let seasons = format!(
                        "{} seasons · {} episodes",
                        detail.number_of_seasons, detail.number_of_episodes
                    );
                    let rating = format!("{:.1} / 10", detail.vote_average);
                    view! {
                        <article class="detail-page__body">
                            {detail.poster_url.clone().map(|url| view! {
                                <img class="detail-page__poster" src=url alt=detail.name.clone()/>
                            })}
                            <div class="detail-page__info">
                                <h1>{detail.name.clone()}</h1>
                                <p class="detail-page__meta">
                                    <span>{rating}</span>
                                    <span>{seasons}</span>
                                    {detail.first_air_date.clone().map(|d| view! { <span>{d}</span> })}
                                </p>
                                <Show when=move || has_genres>
                                    <p class="detail-page__genres">{genres.clone()}</p>
                                </Show>
                                <p class="detail-page__overview">{detail.overview.clone()}</p>
                            </div>
                        </article>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
