//! Reusable poster card for catalog rows and search results.
//!
//! DESIGN
//! ======
//! Keeps catalog presentation consistent between the home rows and the browse
//! grid while centralizing the movie-vs-TV link distinction.

use leptos::prelude::*;

use crate::net::types::MediaSummary;

/// A clickable poster card linking to the entry's detail page.
#[component]
pub fn MediaCard(media: MediaSummary) -> impl IntoView {
    let href = format!("{}/{}", media.kind.route_prefix(), media.id);
    let rating = format!("{:.1}", media.vote_average);
    let year = media
        .release_date
        .as_deref()
        .and_then(|d| d.get(..4))
        .map(str::to_owned);
    let title = media.title.clone();

    view! {
        <a class="media-card" href=href>
            {match media.poster_url.clone() {
                Some(url) => view! {
                    <img class="media-card__poster" src=url alt=title.clone() loading="lazy"/>
                }
                .into_any(),
                None => view! {
                    <span class="media-card__poster media-card__poster--missing">{title.clone()}</span>
                }
                .into_any(),
            }}
            <span class="media-card__title">{title}</span>
            <span class="media-card__meta">
                <span class="media-card__rating">{rating}</span>
                {year.map(|y| view! { <span class="media-card__year">{y}</span> })}
            </span>
        </a>
    }
}
