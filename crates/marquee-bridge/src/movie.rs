use serde::{Deserialize, Serialize};

/// The catalog sections exposed by the movie API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogSection {
    Popular,
    TopRated,
    Upcoming,
}

impl CatalogSection {
    /// The path segment used by the remote API for this section.
    pub fn path_segment(&self) -> &'static str {
        match self {
            CatalogSection::Popular => "popular",
            CatalogSection::TopRated => "top_rated",
            CatalogSection::Upcoming => "upcoming",
        }
    }

    /// Human-readable section heading.
    pub fn title(&self) -> &'static str {
        match self {
            CatalogSection::Popular => "Popular Movies",
            CatalogSection::TopRated => "Top Rated Movies",
            CatalogSection::Upcoming => "Upcoming Movies",
        }
    }

    /// All sections, in the order they appear on the home view.
    pub fn all() -> [CatalogSection; 3] {
        [
            CatalogSection::Popular,
            CatalogSection::TopRated,
            CatalogSection::Upcoming,
        ]
    }
}

/// A single movie record as returned by the catalog endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
}

/// One saved entry of the user's watchlist, as returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub user_id: u64,
    pub movie_id: u64,
    pub movie_name: String,
    /// Timestamp string of when the entry was added, as sent by the server.
    pub add_at: String,
}
