//! Scripted catalog for tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::CatalogProvider;
use crate::errors::CatalogError;
use crate::types::{MediaType, MovieDetail, MovieSummary};

/// Scripted in-memory catalog.
///
/// Term and id tables are fixed at construction. Failures and per-term
/// latency can be injected, and call counts are tracked so tests can
/// assert how many remote round trips a run performed.
#[derive(Debug, Default)]
pub struct MockCatalog {
    searches: HashMap<String, Vec<MovieSummary>>,
    details: HashMap<String, MovieDetail>,
    failing_terms: HashSet<String>,
    delays: HashMap<String, Duration>,
    search_calls: AtomicUsize,
    lookup_calls: AtomicUsize,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the summaries returned for a search term.
    pub fn with_search(mut self, term: &str, results: Vec<MovieSummary>) -> Self {
        self.searches.insert(term.to_string(), results);
        self
    }

    /// Scripts the detail returned for its own id.
    pub fn with_detail(mut self, detail: MovieDetail) -> Self {
        self.details.insert(detail.imdb_id.clone(), detail);
        self
    }

    /// Makes searches for a term fail with a catalog rejection.
    pub fn with_failing_term(mut self, term: &str) -> Self {
        self.failing_terms.insert(term.to_string());
        self
    }

    /// Delays searches for a term, simulating a slow remote call.
    pub fn with_search_delay(mut self, term: &str, delay: Duration) -> Self {
        self.delays.insert(term.to_string(), delay);
        self
    }

    pub fn search_call_count(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn lookup_call_count(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogProvider for MockCatalog {
    async fn search(
        &self,
        term: &str,
        _media_type: MediaType,
        _year: Option<&str>,
    ) -> Result<Vec<MovieSummary>, CatalogError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(term) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_terms.contains(term) {
            return Err(CatalogError::SearchRejected {
                query: term.to_string(),
                reason: "Movie not found!".to_string(),
            });
        }
        Ok(self.searches.get(term).cloned().unwrap_or_default())
    }

    async fn lookup(&self, imdb_id: &str) -> Result<Option<MovieDetail>, CatalogError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.details.get(imdb_id).cloned())
    }
}

/// Builds a bare summary for scripting.
pub fn summary(imdb_id: &str, title: &str) -> MovieSummary {
    MovieSummary {
        imdb_id: imdb_id.to_string(),
        title: title.to_string(),
        year: "2020".to_string(),
        media_type: MediaType::Movie,
        poster_url: None,
        country: None,
        language: None,
    }
}

/// Builds a detail record for scripting.
pub fn detail(
    imdb_id: &str,
    title: &str,
    country: Option<&str>,
    language: Option<&str>,
    rating: Option<&str>,
) -> MovieDetail {
    MovieDetail {
        imdb_id: imdb_id.to_string(),
        title: title.to_string(),
        year: "2020".to_string(),
        media_type: MediaType::Movie,
        poster_url: None,
        country: country.map(str::to_string),
        language: language.map(str::to_string),
        rating: rating.map(str::to_string),
        genre: Some("Drama".to_string()),
        plot: Some("Scripted plot.".to_string()),
        released: None,
    }
}
