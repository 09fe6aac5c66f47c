//! Demo provider with canned catalog data.
//!
//! Serves a small region- and genre-diverse catalog so the full discovery
//! workflow can run offline, without an API key.

use async_trait::async_trait;

use super::CatalogProvider;
use crate::errors::CatalogError;
use crate::types::{MediaType, MovieDetail, MovieSummary};

/// Offline catalog provider for development and demos.
#[derive(Debug)]
pub struct DemoProvider {
    catalog: Vec<MovieDetail>,
}

impl Default for DemoProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn entry(
    imdb_id: &str,
    title: &str,
    year: &str,
    country: &str,
    language: &str,
    rating: &str,
    genre: &str,
    plot: &str,
) -> MovieDetail {
    MovieDetail {
        imdb_id: imdb_id.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        media_type: MediaType::Movie,
        poster_url: None,
        country: Some(country.to_string()),
        language: Some(language.to_string()),
        rating: Some(rating.to_string()),
        genre: Some(genre.to_string()),
        plot: Some(plot.to_string()),
        released: None,
    }
}

impl DemoProvider {
    pub fn new() -> Self {
        let catalog = vec![
            entry(
                "tt1187043",
                "3 Idiots",
                "2009",
                "India",
                "Hindi, English",
                "8.4",
                "Comedy, Drama",
                "Two friends search for their long-lost college companion.",
            ),
            entry(
                "tt0468569",
                "The Dark Knight",
                "2008",
                "USA",
                "English",
                "9.0",
                "Action, Crime, Drama",
                "Batman faces the Joker's reign of chaos over Gotham.",
            ),
            entry(
                "tt0133093",
                "The Matrix",
                "1999",
                "USA",
                "English",
                "8.7",
                "Action, Sci-Fi",
                "A hacker learns the true nature of his reality.",
            ),
            entry(
                "tt1375666",
                "Inception",
                "2010",
                "USA, UK",
                "English",
                "8.8",
                "Action, Adventure, Sci-Fi",
                "A thief plants an idea through shared dreaming.",
            ),
            entry(
                "tt0117951",
                "Trainspotting",
                "1996",
                "UK",
                "English",
                "8.1",
                "Drama",
                "Heroin addicts drift through economically depressed Edinburgh.",
            ),
            entry(
                "tt1233381",
                "London Boulevard",
                "2010",
                "UK",
                "English",
                "6.2",
                "Crime, Drama, Romance",
                "An ex-convict falls for a reclusive actress.",
            ),
            entry(
                "tt0364569",
                "Oldboy",
                "2003",
                "South Korea",
                "Korean",
                "8.4",
                "Action, Drama, Mystery",
                "A man imprisoned for fifteen years hunts his captor.",
            ),
            entry(
                "tt6751668",
                "Parasite",
                "2019",
                "South Korea",
                "Korean",
                "8.5",
                "Drama, Thriller",
                "A poor family schemes its way into a wealthy household.",
            ),
            entry(
                "tt0245429",
                "Spirited Away",
                "2001",
                "Japan",
                "Japanese",
                "8.6",
                "Animation, Adventure, Family",
                "A girl wanders into a world of spirits and bathhouses.",
            ),
            entry(
                "tt0211915",
                "Am\u{e9}lie",
                "2001",
                "France",
                "French",
                "8.3",
                "Comedy, Romance",
                "A shy waitress quietly orchestrates the lives around her.",
            ),
            entry(
                "tt0082096",
                "Das Boot",
                "1981",
                "West Germany",
                "German",
                "8.4",
                "Drama, War",
                "A U-boat crew endures the claustrophobia of patrol duty.",
            ),
            entry(
                "tt0457430",
                "Pan's Labyrinth",
                "2006",
                "Mexico, Spain",
                "Spanish",
                "8.2",
                "Drama, Fantasy, War",
                "A girl escapes into a mythical labyrinth under Francoist Spain.",
            ),
            entry(
                "tt0095765",
                "Cinema Paradiso",
                "1988",
                "Italy",
                "Italian",
                "8.5",
                "Drama, Romance",
                "A filmmaker recalls his childhood in a Sicilian cinema.",
            ),
            entry(
                "tt0299977",
                "Hero",
                "2002",
                "China",
                "Mandarin",
                "7.9",
                "Action, Adventure, Drama",
                "A nameless warrior recounts his defeat of three assassins.",
            ),
            entry(
                "tt0816692",
                "Interstellar",
                "2014",
                "USA, UK",
                "English",
                "8.7",
                "Adventure, Drama, Sci-Fi",
                "Explorers travel through a wormhole to save humanity.",
            ),
        ];
        Self { catalog }
    }

    fn matches(detail: &MovieDetail, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        };
        detail.title.to_lowercase().contains(&needle)
            || contains(&detail.country)
            || contains(&detail.language)
    }
}

#[async_trait]
impl CatalogProvider for DemoProvider {
    async fn search(
        &self,
        term: &str,
        _media_type: MediaType,
        _year: Option<&str>,
    ) -> Result<Vec<MovieSummary>, CatalogError> {
        // Title searches against the live catalog also hit country and
        // language words embedded in titles; the canned catalog matches
        // those fields directly to keep region discovery usable offline.
        Ok(self
            .catalog
            .iter()
            .filter(|detail| Self::matches(detail, term))
            .map(|detail| MovieSummary {
                imdb_id: detail.imdb_id.clone(),
                title: detail.title.clone(),
                year: detail.year.clone(),
                media_type: detail.media_type,
                poster_url: detail.poster_url.clone(),
                country: None,
                language: None,
            })
            .collect())
    }

    async fn lookup(&self, imdb_id: &str) -> Result<Option<MovieDetail>, CatalogError> {
        Ok(self
            .catalog
            .iter()
            .find(|detail| detail.imdb_id == imdb_id)
            .cloned())
    }
}
