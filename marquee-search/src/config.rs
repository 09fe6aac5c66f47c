//! Centralized engine configuration.
//!
//! All tunable parameters live here rather than as constants scattered
//! through the pipeline and session controller.

use std::time::Duration;

/// Tunables for the aggregation pipeline and session controller.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub debounce: DebounceConfig,
    pub pacing: PacingConfig,
    pub limits: LimitConfig,
}

/// Debounce behavior for query and filter mutations.
#[derive(Debug, Clone)]
pub struct DebounceConfig {
    /// Quiet window after the last mutation before a run launches.
    pub window: Duration,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            window: Duration::from_millis(1000),
        }
    }
}

/// Minimum intervals between consecutive catalog calls.
///
/// The catalog rate-limits aggressively; proxy strategies space their
/// calls out instead of firing them concurrently.
#[derive(Debug, Clone)]
pub struct PacingConfig {
    /// Interval between proxy title searches.
    pub search_interval: Duration,
    /// Interval between per-candidate detail lookups.
    pub detail_interval: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            search_interval: Duration::from_millis(150),
            detail_interval: Duration::from_millis(75),
        }
    }
}

impl PacingConfig {
    /// No inter-call delays. Intended for tests and scripted providers.
    pub fn none() -> Self {
        Self {
            search_interval: Duration::ZERO,
            detail_interval: Duration::ZERO,
        }
    }
}

/// Caps applied while aggregating.
#[derive(Debug, Clone)]
pub struct LimitConfig {
    /// Proxy terms issued per strategy run.
    pub proxy_terms: usize,
    /// Deduplicated candidates carried into enrichment per run.
    pub candidate_cap: usize,
    /// Ranked results published per run.
    pub result_cap: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            proxy_terms: 3,
            candidate_cap: 20,
            result_cap: 10,
        }
    }
}
