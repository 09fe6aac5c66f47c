//! Search strategy selection.

use crate::ranking;
use crate::region::RegionLabel;
use crate::types::FilterState;

/// How a pipeline run sources its candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Proxy searches keyed by the region's country and city terms, with
    /// classifier confirmation after enrichment.
    Region(RegionLabel),
    /// Proxy searches drawn from the curated term pool for a genre.
    GenreProxy(String),
    /// A single search with the raw query text.
    Plain(String),
}

impl SearchStrategy {
    /// Picks the strategy for the current query and filter set.
    ///
    /// Region wins over everything else. Genre proxying applies only when
    /// no mood is active and the genre has a curated pool; a genre the
    /// pool does not know falls through to a plain search.
    pub fn select(query: &str, filters: &FilterState) -> SearchStrategy {
        if let Some(region) = filters.region {
            return SearchStrategy::Region(region);
        }

        if filters.mood.is_none()
            && let Some(genre) = &filters.genre
            && ranking::popular_terms(genre).is_some()
        {
            return SearchStrategy::GenreProxy(genre.clone());
        }

        SearchStrategy::Plain(query.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mood;

    #[test]
    fn region_wins_over_genre_and_mood() {
        let filters = FilterState {
            genre: Some("Horror".to_string()),
            mood: Some(Mood::Scary),
            region: Some(RegionLabel::Korean),
            ..FilterState::default()
        };
        assert_eq!(
            SearchStrategy::select("ignored", &filters),
            SearchStrategy::Region(RegionLabel::Korean)
        );
    }

    #[test]
    fn curated_genre_without_mood_uses_proxies() {
        let filters = FilterState {
            genre: Some("Horror".to_string()),
            ..FilterState::default()
        };
        assert_eq!(
            SearchStrategy::select("Horror", &filters),
            SearchStrategy::GenreProxy("Horror".to_string())
        );
    }

    #[test]
    fn mood_forces_plain_search() {
        let filters = FilterState {
            genre: Some("Comedy".to_string()),
            mood: Some(Mood::Funny),
            ..FilterState::default()
        };
        assert_eq!(
            SearchStrategy::select("Comedy", &filters),
            SearchStrategy::Plain("Comedy".to_string())
        );
    }

    #[test]
    fn unknown_genre_falls_back_to_plain() {
        let filters = FilterState {
            genre: Some("Telenovela".to_string()),
            ..FilterState::default()
        };
        assert_eq!(
            SearchStrategy::select("Telenovela", &filters),
            SearchStrategy::Plain("Telenovela".to_string())
        );
    }
}
