//! Marquee Search - catalog search aggregation and ranking
//!
//! Coordinates proxy searches against a remote movie catalog, merges and
//! deduplicates the partial records they return, enriches candidates with
//! a second round of detail lookups, classifies cinema of origin, and
//! ranks the survivors into a bounded result list. A debouncing session
//! controller owns the query/filter state and discards superseded runs.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod pipeline;
pub mod providers;
pub mod ranking;
pub mod region;
pub mod session;
pub mod strategy;
pub mod types;

// Re-export main types
pub use catalog::CatalogClient;
pub use config::{DebounceConfig, EngineConfig, LimitConfig, PacingConfig};
pub use errors::CatalogError;
pub use pipeline::{SearchOutcome, SearchPipeline};
pub use providers::{CatalogProvider, DemoProvider, OmdbProvider};
pub use region::{RegionDisplay, RegionLabel, classify};
pub use session::{FilterMode, SearchFailure, SearchSession, SessionSnapshot};
pub use strategy::SearchStrategy;
pub use types::{EnrichedMovie, FilterState, MediaType, Mood, MovieDetail, MovieSummary};

/// Convenience type alias for Results with CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;
