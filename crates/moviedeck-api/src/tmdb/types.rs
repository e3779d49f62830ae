//! TMDB API response types.
//!
//! All fields except the numeric id are defaulted or optional: the
//! upstream adds and removes fields without notice, and a partial body
//! must never abort decoding.

use serde::Deserialize;

// --- Movie ---

/// A single movie record.
///
/// Decoded from both the `movie/{id}` detail endpoint and the entries of
/// list endpoints; fields present only on one of the two decode to their
/// defaults on the other.
#[derive(Debug, Clone, Deserialize)]
pub struct Movie {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    #[serde(default)]
    pub title: String,
    /// Original title.
    #[serde(default)]
    pub original_title: String,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Release date (YYYY-MM-DD or null).
    pub release_date: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Genre IDs (list endpoints only).
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Video flag.
    #[serde(default)]
    pub video: bool,
}

// --- Movie page ---

/// One page of movie results with pagination metadata.
///
/// Response envelope of the `movie/popular` and `movie/top_rated`
/// endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MoviePage {
    /// Current page number (1-based).
    pub page: u32,
    /// Movies on this page, in upstream order.
    #[serde(default)]
    pub results: Vec<Movie>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
}

// --- Error Response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[serde(default)]
    pub success: bool,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_parse_movie_detail_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/movie_550.json");

        // Act
        let movie: Movie = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(movie.id, 550);
        assert_eq!(movie.title, "Fight Club");
        assert_eq!(movie.original_language, "en");
        assert_eq!(movie.release_date.as_deref(), Some("1999-10-15"));
        assert!(movie.vote_count > 0);
        // Detail bodies carry `genres` objects instead of `genre_ids`.
        assert!(movie.genre_ids.is_empty());
    }

    #[test]
    fn test_parse_movie_page_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/popular_page1.json");

        // Act
        let page: MoviePage = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(page.page, 1);
        assert_eq!(page.results.len(), 3);
        assert_eq!(page.total_pages, 500);
        assert!(page.results[0].id > 0);
        assert!(!page.results[0].genre_ids.is_empty());
    }

    #[test]
    fn test_parse_movie_page_empty_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/movies_empty.json");

        // Act
        let page: MoviePage = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(page.total_results, 0);
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_parse_movie_minimal_body() {
        // Arrange: only the id is present.
        let json = r#"{"id": 7}"#;

        // Act
        let movie: Movie = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(movie.id, 7);
        assert_eq!(movie.title, "");
        assert!(movie.overview.is_none());
        assert!(movie.release_date.is_none());
        assert_eq!(movie.popularity, 0.0);
        assert!(!movie.adult);
    }

    #[test]
    fn test_parse_movie_ignores_unknown_fields() {
        // Arrange
        let json = r#"{"id": 42, "title": "Example", "brand_new_field": {"nested": [1, 2, 3]}}"#;

        // Act
        let movie: Movie = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(movie.id, 42);
        assert_eq!(movie.title, "Example");
    }

    #[test]
    fn test_parse_error_response() {
        // Arrange
        let json = r#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#;

        // Act
        let error: TmdbErrorResponse = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(error.status_code, 7);
        assert!(!error.success);
        assert!(error.status_message.contains("Invalid API key"));
    }
}
