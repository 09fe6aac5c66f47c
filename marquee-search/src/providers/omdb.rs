//! OMDb catalog provider for production use.

use async_trait::async_trait;
use serde::Deserialize;

use super::CatalogProvider;
use crate::errors::CatalogError;
use crate::types::{MediaType, MovieDetail, MovieSummary};

const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// OMDb-backed catalog provider.
///
/// The free tier allows 1000 requests per day; set the OMDB_API_KEY
/// environment variable to use a dedicated key.
#[derive(Debug, Clone)]
pub struct OmdbProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OmdbProvider {
    /// Creates a provider against the public catalog endpoint, picking up
    /// OMDB_API_KEY from the environment when present.
    pub fn new() -> Self {
        Self::with_config(
            DEFAULT_BASE_URL.to_string(),
            std::env::var("OMDB_API_KEY").ok(),
        )
    }

    /// Creates a provider with explicit endpoint and key.
    pub fn with_config(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    fn request(&self) -> reqwest::RequestBuilder {
        let mut builder = self.client.get(&self.base_url);
        if let Some(ref api_key) = self.api_key {
            builder = builder.query(&[("apikey", api_key.as_str())]);
        }
        builder
    }
}

impl Default for OmdbProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Envelope for a title-search response.
#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Search")]
    search: Option<Vec<OmdbSummary>>,
    /// "True" or "False"; the catalog's only success discriminant.
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// Summary-shaped record inside a search response.
#[derive(Debug, Deserialize)]
struct OmdbSummary {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Type")]
    media_type: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Country")]
    country: Option<String>,
    #[serde(rename = "Language")]
    language: Option<String>,
}

/// Detail-shaped record returned by an id lookup.
#[derive(Debug, Deserialize)]
struct OmdbDetailResponse {
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Type")]
    media_type: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Country")]
    country: Option<String>,
    #[serde(rename = "Language")]
    language: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Released")]
    released: Option<String>,
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    #[allow(dead_code)]
    error: Option<String>,
}

/// Collapses the catalog's "N/A" placeholder to a real absence.
fn not_available(value: Option<String>) -> Option<String> {
    value.filter(|v| v != "N/A")
}

fn parse_media_type(value: Option<&str>) -> MediaType {
    match value {
        Some("series") => MediaType::Series,
        Some("episode") => MediaType::Episode,
        _ => MediaType::Movie,
    }
}

impl From<OmdbSummary> for MovieSummary {
    fn from(wire: OmdbSummary) -> Self {
        MovieSummary {
            imdb_id: wire.imdb_id,
            title: wire.title,
            year: wire.year,
            media_type: parse_media_type(wire.media_type.as_deref()),
            poster_url: not_available(wire.poster),
            country: not_available(wire.country),
            language: not_available(wire.language),
        }
    }
}

impl From<OmdbDetailResponse> for MovieDetail {
    fn from(wire: OmdbDetailResponse) -> Self {
        let released = not_available(wire.released)
            .and_then(|date| chrono::NaiveDate::parse_from_str(&date, "%d %b %Y").ok());
        MovieDetail {
            imdb_id: wire.imdb_id.unwrap_or_default(),
            title: wire.title.unwrap_or_else(|| "Unknown".to_string()),
            year: wire.year.unwrap_or_default(),
            media_type: parse_media_type(wire.media_type.as_deref()),
            poster_url: not_available(wire.poster),
            country: not_available(wire.country),
            language: not_available(wire.language),
            rating: not_available(wire.imdb_rating),
            genre: not_available(wire.genre),
            plot: not_available(wire.plot),
            released,
        }
    }
}

/// Converts a decoded search envelope into summaries.
///
/// A "False" discriminant is a rejection no matter the underlying cause;
/// the catalog reports quota errors, malformed terms, and zero results
/// identically.
fn parse_search_body(
    term: &str,
    body: OmdbSearchResponse,
) -> Result<Vec<MovieSummary>, CatalogError> {
    if body.response != "True" {
        return Err(CatalogError::SearchRejected {
            query: term.to_string(),
            reason: body.error.unwrap_or_else(|| "unknown error".to_string()),
        });
    }
    Ok(body
        .search
        .unwrap_or_default()
        .into_iter()
        .map(MovieSummary::from)
        .collect())
}

#[async_trait]
impl CatalogProvider for OmdbProvider {
    async fn search(
        &self,
        term: &str,
        media_type: MediaType,
        year: Option<&str>,
    ) -> Result<Vec<MovieSummary>, CatalogError> {
        let mut params = vec![("s", term), ("type", media_type.as_str())];
        if let Some(year) = year {
            params.push(("y", year));
        }

        let response = self
            .request()
            .query(&params)
            .send()
            .await
            .map_err(|e| CatalogError::Network {
                reason: format!("catalog search request failed: {e}"),
            })?;

        let body: OmdbSearchResponse =
            response.json().await.map_err(|e| CatalogError::Parse {
                reason: format!("catalog search response decode failed: {e}"),
            })?;

        parse_search_body(term, body)
    }

    async fn lookup(&self, imdb_id: &str) -> Result<Option<MovieDetail>, CatalogError> {
        let response = self
            .request()
            .query(&[("i", imdb_id), ("plot", "short")])
            .send()
            .await
            .map_err(|e| CatalogError::Network {
                reason: format!("catalog lookup request failed: {e}"),
            })?;

        let body: OmdbDetailResponse =
            response.json().await.map_err(|e| CatalogError::Parse {
                reason: format!("catalog lookup response decode failed: {e}"),
            })?;

        // Malformed ids and true not-found both come back as "False".
        if body.response != "True" {
            return Ok(None);
        }
        Ok(Some(body.into()))
    }
}
