//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror backend response payloads so serde deserialization
//! stays lossless and page code can remain schema-driven. Optional fields
//! default instead of failing the whole payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Whether the account's email address has been verified.
    #[serde(default)]
    pub email_verified: bool,
}

/// Whether a catalog entry is a movie or a TV show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    /// Route prefix for detail pages of this kind.
    #[must_use]
    pub fn route_prefix(self) -> &'static str {
        match self {
            Self::Movie => "/movie",
            Self::Tv => "/tv",
        }
    }
}

/// A catalog entry summary for trending rows and search results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaSummary {
    /// TMDB-style numeric identifier.
    pub id: i64,
    /// Display title (movie title or TV show name).
    pub title: String,
    /// Movie vs TV discriminator; drives the detail-page link.
    #[serde(rename = "media_type")]
    pub kind: MediaKind,
    /// Poster image URL, if available.
    #[serde(default)]
    pub poster_url: Option<String>,
    /// Short synopsis.
    #[serde(default)]
    pub overview: String,
    /// Average rating on a 0–10 scale.
    #[serde(default)]
    pub vote_average: f64,
    /// First release/air date as `YYYY-MM-DD`, if known.
    #[serde(default)]
    pub release_date: Option<String>,
}

/// A genre tag attached to detail payloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Full movie detail payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub backdrop_url: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Runtime in minutes, if known.
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
}

/// Full TV show detail payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TvDetail {
    pub id: i64,
    /// TV shows use `name` on the wire where movies use `title`.
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub backdrop_url: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub number_of_seasons: u32,
    #[serde(default)]
    pub number_of_episodes: u32,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
}

/// A page of results, as returned by search and trending endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: u32,
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

/// Response body of `POST /api/auth/verify-email`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifyEmailResponse {
    pub message: String,
}
