//! Aggregation pipeline.
//!
//! Orchestrates one or more catalog calls per strategy, then merges,
//! enriches, classifies, and ranks the candidates into a bounded result
//! list. Remote calls inside a run are sequential with a configurable
//! inter-call interval; the catalog tolerates bursts poorly.

use tokio::time::sleep;
use tracing::info;

use crate::catalog::CatalogClient;
use crate::config::EngineConfig;
use crate::ranking::{self, dedupe_by_id, merge_summary_detail, rank_by_rating, top_n};
use crate::region::{self, RegionLabel};
use crate::strategy::SearchStrategy;
use crate::types::{EnrichedMovie, FilterState, MovieSummary};

/// One settled pipeline outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Non-empty ranked result list.
    Results(Vec<EnrichedMovie>),
    /// Nothing survived the run; the message references the query the
    /// user typed, even when the run searched internal proxy terms.
    NoResults {
        /// The user-visible query text.
        query: String,
        /// User-facing message.
        message: String,
    },
}

impl SearchOutcome {
    fn empty_for(query: &str) -> SearchOutcome {
        SearchOutcome::NoResults {
            query: query.to_string(),
            message: format!("No movies found for \"{query}\". Try a different search term."),
        }
    }

    /// The result list, when this outcome carries one.
    pub fn movies(&self) -> Option<&[EnrichedMovie]> {
        match self {
            SearchOutcome::Results(movies) => Some(movies),
            SearchOutcome::NoResults { .. } => None,
        }
    }
}

/// Strategy-driven aggregation over the catalog.
///
/// A pure function of (query, filters) given its catalog client: runs
/// share no state, so the pipeline can be invoked repeatedly and
/// concurrently. Infallible by construction — remote failures shrink the
/// candidate set, and an empty final set becomes a `NoResults` outcome.
#[derive(Debug, Clone)]
pub struct SearchPipeline {
    catalog: CatalogClient,
    config: EngineConfig,
}

impl SearchPipeline {
    pub fn new(catalog: CatalogClient, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Runs one aggregation pass for the query and filter set.
    pub async fn run(&self, query: &str, filters: &FilterState) -> SearchOutcome {
        let results = match SearchStrategy::select(query, filters) {
            SearchStrategy::Region(region) => self.run_region(region, filters).await,
            SearchStrategy::GenreProxy(genre) => self.run_genre(&genre, filters).await,
            SearchStrategy::Plain(term) => self.run_plain(&term, filters).await,
        };

        if results.is_empty() {
            SearchOutcome::empty_for(query)
        } else {
            SearchOutcome::Results(results)
        }
    }

    /// Single search with the raw query; native catalog order, no
    /// enrichment round.
    async fn run_plain(&self, term: &str, filters: &FilterState) -> Vec<EnrichedMovie> {
        self.catalog
            .search_by_term(term, filters.media_type, filters.year.as_deref())
            .await
            .into_iter()
            .map(EnrichedMovie::from)
            .collect()
    }

    /// Region discovery: proxy-term recall, then classifier precision.
    ///
    /// The proxy searches over-recall on purpose; the classifier is the
    /// authority on which candidates actually belong to the region.
    async fn run_region(&self, target: RegionLabel, filters: &FilterState) -> Vec<EnrichedMovie> {
        let limits = &self.config.limits;
        let terms: Vec<&str> = target
            .proxy_terms()
            .into_iter()
            .take(limits.proxy_terms)
            .collect();
        info!(region = %target, ?terms, "region discovery");

        let candidates = self.gather(&terms, filters).await;
        let candidates = top_n(dedupe_by_id(candidates), limits.candidate_cap);

        let mut confirmed = Vec::new();
        for (index, candidate) in candidates.into_iter().enumerate() {
            if index > 0 {
                sleep(self.config.pacing.detail_interval).await;
            }
            let Some(detail) = self.catalog.fetch_by_id(&candidate.imdb_id).await else {
                continue;
            };
            // Unrated records cannot be ranked into a top list.
            if detail.rating.is_none() {
                continue;
            }
            let enriched = merge_summary_detail(candidate, &detail);
            if region::classify(Some(&enriched)) == target {
                confirmed.push(enriched);
            }
        }

        top_n(rank_by_rating(confirmed), limits.result_cap)
    }

    /// Genre discovery through sampled proxy titles from the curated pool.
    ///
    /// Unlike the region path, unrated candidates are kept; they rank
    /// last instead of being dropped.
    async fn run_genre(&self, genre: &str, filters: &FilterState) -> Vec<EnrichedMovie> {
        let limits = &self.config.limits;
        let terms = ranking::sample_terms(genre, limits.proxy_terms);
        let term_refs: Vec<&str> = terms.iter().map(String::as_str).collect();
        info!(genre, terms = ?term_refs, "genre discovery");

        let candidates = self.gather(&term_refs, filters).await;
        let candidates = top_n(dedupe_by_id(candidates), limits.candidate_cap);

        let mut enriched = Vec::new();
        for (index, candidate) in candidates.into_iter().enumerate() {
            if index > 0 {
                sleep(self.config.pacing.detail_interval).await;
            }
            if let Some(detail) = self.catalog.fetch_by_id(&candidate.imdb_id).await {
                enriched.push(merge_summary_detail(candidate, &detail));
            }
        }

        top_n(rank_by_rating(enriched), limits.result_cap)
    }

    /// Issues searches sequentially, accumulating every hit.
    async fn gather(&self, terms: &[&str], filters: &FilterState) -> Vec<MovieSummary> {
        let mut all = Vec::new();
        for (index, term) in terms.iter().enumerate() {
            if index > 0 {
                sleep(self.config.pacing.search_interval).await;
            }
            let hits = self
                .catalog
                .search_by_term(term, filters.media_type, filters.year.as_deref())
                .await;
            all.extend(hits);
        }
        all
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::providers::mock::{MockCatalog, detail, summary};

    fn pipeline(provider: MockCatalog) -> (SearchPipeline, Arc<MockCatalog>) {
        let provider = Arc::new(provider);
        let config = EngineConfig {
            pacing: crate::config::PacingConfig::none(),
            ..EngineConfig::default()
        };
        (
            SearchPipeline::new(CatalogClient::new(provider.clone()), config),
            provider,
        )
    }

    fn region_filters(region: RegionLabel) -> FilterState {
        FilterState {
            region: Some(region),
            ..FilterState::default()
        }
    }

    #[tokio::test]
    async fn plain_search_keeps_native_order_without_enrichment() {
        let (pipeline, provider) = pipeline(MockCatalog::new().with_search(
            "hacker",
            vec![summary("tt2", "Hackers"), summary("tt1", "The Hacker")],
        ));
        let filters = FilterState::default();

        let outcome = pipeline.run("hacker", &filters).await;
        let movies = outcome.movies().expect("results");
        let ids: Vec<&str> = movies.iter().map(|m| m.imdb_id.as_str()).collect();
        assert_eq!(ids, ["tt2", "tt1"]);
        assert_eq!(provider.lookup_call_count(), 0);
    }

    #[tokio::test]
    async fn region_run_confirms_with_classifier_and_ranks() {
        let provider = MockCatalog::new()
            .with_search(
                "Korea",
                vec![
                    summary("k1", "Oldboy"),
                    summary("k2", "The Host"),
                    summary("h1", "American Hustle"),
                    summary("k1", "Oldboy"),
                ],
            )
            .with_search(
                "Seoul",
                vec![summary("k3", "Seoul Station"), summary("k4", "Haeundae")],
            )
            .with_detail(detail("k1", "Oldboy", Some("South Korea"), Some("Korean"), Some("8.4")))
            .with_detail(detail("k2", "The Host", Some("South Korea"), Some("Korean"), Some("7.1")))
            .with_detail(detail("h1", "American Hustle", Some("USA"), Some("English"), Some("9.9")))
            .with_detail(detail("k4", "Haeundae", Some("South Korea"), Some("Korean"), None));
        // k3 has no detail at all; k4 has a detail but no rating.
        let (pipeline, provider) = pipeline(provider);

        let outcome = pipeline
            .run("Korean cinema", &region_filters(RegionLabel::Korean))
            .await;
        let movies = outcome.movies().expect("results");
        let ids: Vec<&str> = movies.iter().map(|m| m.imdb_id.as_str()).collect();
        // Hollywood candidate filtered out despite its higher rating;
        // survivors sorted descending.
        assert_eq!(ids, ["k1", "k2"]);
        // Three proxy terms searched ("Korean" returned nothing), five
        // unique candidates looked up.
        assert_eq!(provider.search_call_count(), 3);
        assert_eq!(provider.lookup_call_count(), 5);
    }

    #[tokio::test]
    async fn region_run_caps_results() {
        let mut provider = MockCatalog::new();
        let summaries: Vec<_> = (0..25)
            .map(|i| summary(&format!("k{i}"), &format!("Korean Film {i}")))
            .collect();
        provider = provider.with_search("Korea", summaries);
        for i in 0..25 {
            provider = provider.with_detail(detail(
                &format!("k{i}"),
                &format!("Korean Film {i}"),
                Some("South Korea"),
                Some("Korean"),
                Some(&format!("{}.0", i % 10)),
            ));
        }
        let (pipeline, provider) = pipeline(provider);

        let outcome = pipeline
            .run("Korean", &region_filters(RegionLabel::Korean))
            .await;
        let movies = outcome.movies().expect("results");
        assert_eq!(movies.len(), 10);
        // Candidate cap bounds the enrichment round, not just the output.
        assert_eq!(provider.lookup_call_count(), 20);
        for pair in movies.windows(2) {
            assert!(pair[0].rating_value() >= pair[1].rating_value());
        }
    }

    #[tokio::test]
    async fn genre_run_tolerates_unrated_details() {
        let mut provider = MockCatalog::new();
        // Script every pool term so the random sample is irrelevant.
        for term in ranking::popular_terms("Horror").unwrap() {
            provider = provider.with_search(
                term,
                vec![summary("g1", "It Follows"), summary("g2", "Unrated Cut")],
            );
        }
        provider = provider
            .with_detail(detail("g1", "It Follows", Some("USA"), Some("English"), Some("6.8")))
            .with_detail(detail("g2", "Unrated Cut", Some("USA"), Some("English"), None));
        let (pipeline, _provider) = pipeline(provider);

        let filters = FilterState {
            genre: Some("Horror".to_string()),
            ..FilterState::default()
        };
        let outcome = pipeline.run("Horror", &filters).await;
        let movies = outcome.movies().expect("results");
        let ids: Vec<&str> = movies.iter().map(|m| m.imdb_id.as_str()).collect();
        // The unrated candidate survives and sorts last.
        assert_eq!(ids, ["g1", "g2"]);
    }

    #[tokio::test]
    async fn genre_run_drops_candidates_without_details() {
        let mut provider = MockCatalog::new();
        for term in ranking::popular_terms("Horror").unwrap() {
            provider = provider.with_search(
                term,
                vec![summary("g1", "It Follows"), summary("g3", "Lost Media")],
            );
        }
        provider = provider.with_detail(detail(
            "g1",
            "It Follows",
            Some("USA"),
            Some("English"),
            Some("6.8"),
        ));
        let (pipeline, _provider) = pipeline(provider);

        let filters = FilterState {
            genre: Some("Horror".to_string()),
            ..FilterState::default()
        };
        let outcome = pipeline.run("Horror", &filters).await;
        let movies = outcome.movies().expect("results");
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].imdb_id, "g1");
    }

    #[tokio::test]
    async fn empty_outcome_reports_the_literal_query() {
        let (pipeline, _provider) = pipeline(MockCatalog::new());

        // Region strategy searched proxy terms, but the error must still
        // reference what the user typed.
        let outcome = pipeline
            .run("\u{1F1F0}\u{1F1F7} Korean", &region_filters(RegionLabel::Korean))
            .await;
        match outcome {
            SearchOutcome::NoResults { query, message } => {
                assert_eq!(query, "\u{1F1F0}\u{1F1F7} Korean");
                assert!(message.contains("\u{1F1F0}\u{1F1F7} Korean"));
            }
            SearchOutcome::Results(_) => panic!("expected empty outcome"),
        }
    }

    #[tokio::test]
    async fn failing_search_downgrades_to_empty_outcome() {
        let (pipeline, _provider) = pipeline(MockCatalog::new().with_failing_term("asdfgh"));

        let outcome = pipeline.run("asdfgh", &FilterState::default()).await;
        match outcome {
            SearchOutcome::NoResults { query, .. } => assert_eq!(query, "asdfgh"),
            SearchOutcome::Results(_) => panic!("expected empty outcome"),
        }
    }
}
