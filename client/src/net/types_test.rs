use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_summary_json() -> serde_json::Value {
    serde_json::json!({
        "id": 42,
        "title": "Arrival",
        "media_type": "movie",
        "poster_url": "https://img.example.com/w500/arrival.jpg",
        "overview": "A linguist is recruited by the military.",
        "vote_average": 7.9,
        "release_date": "2016-11-11"
    })
}

// =============================================================
// MediaKind serde + routing
// =============================================================

#[test]
fn media_kind_serializes_to_lowercase() {
    assert_eq!(serde_json::to_string(&MediaKind::Movie).unwrap(), "\"movie\"");
    assert_eq!(serde_json::to_string(&MediaKind::Tv).unwrap(), "\"tv\"");
}

#[test]
fn media_kind_deserializes_from_lowercase() {
    let kind: MediaKind = serde_json::from_str("\"tv\"").unwrap();
    assert_eq!(kind, MediaKind::Tv);
}

#[test]
fn media_kind_route_prefixes() {
    assert_eq!(MediaKind::Movie.route_prefix(), "/movie");
    assert_eq!(MediaKind::Tv.route_prefix(), "/tv");
}

// =============================================================
// MediaSummary
// =============================================================

#[test]
fn media_summary_deserializes_full_payload() {
    let summary: MediaSummary = serde_json::from_value(make_summary_json()).unwrap();
    assert_eq!(summary.id, 42);
    assert_eq!(summary.title, "Arrival");
    assert_eq!(summary.kind, MediaKind::Movie);
    assert_eq!(summary.release_date.as_deref(), Some("2016-11-11"));
}

#[test]
fn media_summary_optional_fields_default() {
    let summary: MediaSummary = serde_json::from_value(serde_json::json!({
        "id": 7,
        "title": "Severance",
        "media_type": "tv"
    }))
    .unwrap();
    assert_eq!(summary.poster_url, None);
    assert_eq!(summary.overview, "");
    assert_eq!(summary.vote_average, 0.0);
    assert_eq!(summary.release_date, None);
}

// =============================================================
// Detail payloads
// =============================================================

#[test]
fn movie_detail_deserializes_with_genres() {
    let detail: MovieDetail = serde_json::from_value(serde_json::json!({
        "id": 42,
        "title": "Arrival",
        "genres": [{"id": 878, "name": "Science Fiction"}],
        "runtime": 116,
        "vote_average": 7.9
    }))
    .unwrap();
    assert_eq!(detail.genres.len(), 1);
    assert_eq!(detail.genres[0].name, "Science Fiction");
    assert_eq!(detail.runtime, Some(116));
    assert_eq!(detail.tagline, None);
}

#[test]
fn tv_detail_uses_name_and_air_date() {
    let detail: TvDetail = serde_json::from_value(serde_json::json!({
        "id": 95396,
        "name": "Severance",
        "number_of_seasons": 2,
        "number_of_episodes": 19,
        "first_air_date": "2022-02-18"
    }))
    .unwrap();
    assert_eq!(detail.name, "Severance");
    assert_eq!(detail.number_of_seasons, 2);
    assert_eq!(detail.first_air_date.as_deref(), Some("2022-02-18"));
}

// =============================================================
// Page<T>
// =============================================================

#[test]
fn page_deserializes_results() {
    let page: Page<MediaSummary> = serde_json::from_value(serde_json::json!({
        "page": 1,
        "results": [make_summary_json()],
        "total_pages": 3,
        "total_results": 55
    }))
    .unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_results, 55);
}

#[test]
fn page_counts_default_when_missing() {
    let page: Page<MediaSummary> = serde_json::from_value(serde_json::json!({
        "page": 1,
        "results": []
    }))
    .unwrap();
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.total_results, 0);
}

// =============================================================
// User
// =============================================================

#[test]
fn user_email_verified_defaults_false() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "name": "Alice",
        "email": "alice@example.com"
    }))
    .unwrap();
    assert!(!user.email_verified);
    assert_eq!(user.avatar_url, None);
}
