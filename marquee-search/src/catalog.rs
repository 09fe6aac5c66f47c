//! Absorbing client over catalog providers.
//!
//! Remote failures are logged and downgraded to empty results here, so a
//! rejected term or a flaky catalog never aborts an aggregation batch.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::providers::CatalogProvider;
use crate::types::{MediaType, MovieDetail, MovieSummary};

/// Cheap-to-clone handle over a catalog provider.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    provider: Arc<dyn CatalogProvider>,
}

impl CatalogClient {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    /// Title search; any failure yields an empty list.
    pub async fn search_by_term(
        &self,
        term: &str,
        media_type: MediaType,
        year: Option<&str>,
    ) -> Vec<MovieSummary> {
        match self.provider.search(term, media_type, year).await {
            Ok(results) => {
                debug!(term, hits = results.len(), "catalog search");
                results
            }
            Err(error) => {
                warn!(term, %error, "catalog search failed");
                Vec::new()
            }
        }
    }

    /// Id lookup; failures and unknown ids both yield `None`.
    pub async fn fetch_by_id(&self, imdb_id: &str) -> Option<MovieDetail> {
        match self.provider.lookup(imdb_id).await {
            Ok(detail) => {
                if detail.is_none() {
                    debug!(imdb_id, "catalog lookup found nothing");
                }
                detail
            }
            Err(error) => {
                warn!(imdb_id, %error, "catalog lookup failed");
                None
            }
        }
    }
}
