//! Movie detail page keyed by the `:id` route parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::MovieDetail;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Visual state of the detail fetch.
#[derive(Clone, Debug, PartialEq)]
enum DetailStatus {
    Loading,
    Ready(Box<MovieDetail>),
    Error(String),
}

#[component]
pub fn MoviePage() -> impl IntoView {
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
            status.set(DetailStatus::Error("Unknown movie.".to_owned()));
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let token = state.token.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_movie(id, token.as_deref()).await {
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
        <div class="detail-page detail-page--movie">
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
                    let runtime = detail.runtime.map(|m| format!("{m} min"));
                    let rating = format!("{:.1} / 10", detail.vote_average);
                    view! {
                        <article class="detail-page__body">
                            {detail.poster_url.clone().map(|url| view! {
                                <img class="detail-page__poster" src=url alt=detail.title.clone()/>
                            })}
                            <div class="detail-page__info">
                                <h1>{detail.title.clone()}</h1>
                                {detail.tagline.clone().map(|t| view! {
                                    <p class="detail-page__tagline">{t}</p>
                                })}
                                <p class="detail-page__meta">
                                    <span>{rating}</span>
                                    {runtime.map(|r| view! { <span>{r}</span> })}
                                    {detail.release_date.clone().map(|d| view! { <span>{d}</span> })}
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
