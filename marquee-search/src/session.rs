//! Search session controller.
//!
//! Owns the query and filter state, debounces pipeline launches, and
//! discards superseded outcomes. Supersession is generation-token
//! comparison: every mutation bumps a counter, each run captures the
//! counter at launch, and only the latest generation may publish. In-flight
//! catalog calls are never aborted; their outcomes are simply dropped.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::debug;

use crate::catalog::CatalogClient;
use crate::config::EngineConfig;
use crate::pipeline::{SearchOutcome, SearchPipeline};
use crate::region::RegionLabel;
use crate::types::{EnrichedMovie, FilterState, Mood};

/// User-facing descriptor for a run that settled without results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFailure {
    /// The query the failed run was launched for.
    pub query: String,
    /// Renderable message.
    pub message: String,
}

/// Read-only view of session state, published after every transition.
#[derive(Debug, Clone, Default)]
pub struct SessionSnapshot {
    /// Query text the last transition was published for.
    pub query: String,
    /// Filter set the last transition was published for.
    pub filters: FilterState,
    /// Last published result list; replaced wholesale per run.
    pub movies: Vec<EnrichedMovie>,
    /// True from run launch until its outcome is published.
    pub is_loading: bool,
    /// Set when the last settled run produced nothing.
    pub error: Option<SearchFailure>,
}

/// Exclusive discovery-mode transitions.
///
/// Genre, mood, and region discovery are mutually exclusive; applying one
/// clears the other two in a single transition instead of at every call
/// site.
#[derive(Debug, Clone)]
pub enum FilterMode {
    /// Top-rated discovery for one genre.
    Genre(String),
    /// Mood discovery; seeds the genre filter with the mood's first
    /// candidate genre.
    Mood(Mood),
    /// Region discovery.
    Region(RegionLabel),
    /// Clears the region selection back to all regions.
    AllRegions,
}

/// Debouncing controller over the aggregation pipeline.
///
/// Cheap to clone; all clones share one session. Mutations funnel through
/// the setters here — consumers read state, they never write it.
#[derive(Debug, Clone)]
pub struct SearchSession {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    pipeline: SearchPipeline,
    debounce: Duration,
    inputs: Mutex<Inputs>,
    publish: watch::Sender<SessionSnapshot>,
}

#[derive(Debug, Default)]
struct Inputs {
    query: String,
    filters: FilterState,
    generation: u64,
}

impl SearchSession {
    pub fn new(catalog: CatalogClient, config: EngineConfig) -> Self {
        let (publish, _) = watch::channel(SessionSnapshot::default());
        Self {
            inner: Arc::new(SessionInner {
                debounce: config.debounce.window,
                pipeline: SearchPipeline::new(catalog, config),
                inputs: Mutex::new(Inputs::default()),
                publish,
            }),
        }
    }

    /// Latest published state.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.publish.borrow().clone()
    }

    /// Change-notified handle onto the published state.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.inner.publish.subscribe()
    }

    /// Current query text as of the latest mutation.
    pub fn query(&self) -> String {
        self.inner.inputs.lock().query.clone()
    }

    /// Current filter set as of the latest mutation.
    pub fn filters(&self) -> FilterState {
        self.inner.inputs.lock().filters.clone()
    }

    /// Replaces the query text and restarts the debounce window.
    pub fn set_query(&self, query: impl Into<String>) {
        {
            self.inner.inputs.lock().query = query.into();
        }
        self.schedule();
    }

    /// Applies a filter patch and restarts the debounce window.
    pub fn set_filters(&self, patch: impl FnOnce(&mut FilterState)) {
        {
            patch(&mut self.inner.inputs.lock().filters);
        }
        self.schedule();
    }

    /// Applies an exclusive discovery mode, updating the query text the
    /// way a filter button would, and restarts the debounce window.
    pub fn select_filter_mode(&self, mode: FilterMode) {
        {
            let mut inputs = self.inner.inputs.lock();
            match mode {
                FilterMode::Genre(genre) => {
                    inputs.query = genre.clone();
                    inputs.filters.genre = Some(genre);
                    inputs.filters.mood = None;
                    inputs.filters.region = None;
                }
                FilterMode::Mood(mood) => {
                    let primary = mood.primary_genre();
                    inputs.query = primary.to_string();
                    inputs.filters.mood = Some(mood);
                    inputs.filters.genre = Some(primary.to_string());
                    inputs.filters.region = None;
                }
                FilterMode::Region(region) => {
                    let display = region.display_info();
                    inputs.query = format!("{} {region}", display.emoji);
                    inputs.filters.region = Some(region);
                    inputs.filters.genre = None;
                    inputs.filters.mood = None;
                }
                FilterMode::AllRegions => {
                    inputs.filters.region = None;
                }
            }
        }
        self.schedule();
    }

    /// Waits for the first settled publish and returns it.
    ///
    /// Intended for one-shot consumers on a fresh session; interactive
    /// consumers should `subscribe` instead.
    pub async fn settled(&self) -> SessionSnapshot {
        let mut receiver = self.subscribe();
        loop {
            let snapshot = receiver.borrow_and_update().clone();
            if !snapshot.is_loading && (!snapshot.movies.is_empty() || snapshot.error.is_some()) {
                return snapshot;
            }
            if receiver.changed().await.is_err() {
                return self.snapshot();
            }
        }
    }

    /// Bumps the generation and schedules a debounced run for it.
    fn schedule(&self) {
        let generation = {
            let mut inputs = self.inner.inputs.lock();
            inputs.generation += 1;
            inputs.generation
        };
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            inner.run_debounced(generation).await;
        });
    }
}

impl SessionInner {
    async fn run_debounced(&self, generation: u64) {
        tokio::time::sleep(self.debounce).await;
        let Some((query, filters)) = self.begin_run(generation) else {
            return;
        };
        let outcome = self.pipeline.run(&query, &filters).await;
        self.finish_run(generation, &query, &filters, outcome);
    }

    /// Publishes the loading state and returns the run inputs, or `None`
    /// when a newer mutation arrived during the debounce window.
    fn begin_run(&self, generation: u64) -> Option<(String, FilterState)> {
        let inputs = self.inputs.lock();
        if inputs.generation != generation {
            debug!(generation, "debounce superseded");
            return None;
        }
        // The previous result list stays visible while the new run is in
        // flight.
        let movies = self.publish.borrow().movies.clone();
        self.publish.send_replace(SessionSnapshot {
            query: inputs.query.clone(),
            filters: inputs.filters.clone(),
            movies,
            is_loading: true,
            error: None,
        });
        Some((inputs.query.clone(), inputs.filters.clone()))
    }

    /// Applies an outcome unless a newer generation exists.
    ///
    /// The staleness check and the publish happen under the same lock
    /// that mutations take, so a newer mutation can never lose to a
    /// stale outcome.
    fn finish_run(&self, generation: u64, query: &str, filters: &FilterState, outcome: SearchOutcome) {
        let inputs = self.inputs.lock();
        if inputs.generation != generation {
            debug!(generation, "discarding superseded outcome");
            return;
        }
        let snapshot = match outcome {
            SearchOutcome::Results(movies) => SessionSnapshot {
                query: query.to_string(),
                filters: filters.clone(),
                movies,
                is_loading: false,
                error: None,
            },
            SearchOutcome::NoResults { query: failed, message } => SessionSnapshot {
                query: query.to_string(),
                filters: filters.clone(),
                movies: Vec::new(),
                is_loading: false,
                error: Some(SearchFailure {
                    query: failed,
                    message,
                }),
            },
        };
        self.publish.send_replace(snapshot);
    }
}
