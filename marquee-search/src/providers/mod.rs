//! Catalog provider implementations.

use async_trait::async_trait;

use crate::errors::CatalogError;
use crate::types::{MediaType, MovieDetail, MovieSummary};

pub mod demo;
#[cfg(test)]
pub mod mock;
pub mod omdb;

pub use demo::DemoProvider;
#[cfg(test)]
pub use mock::MockCatalog;
pub use omdb::OmdbProvider;

/// Remote movie catalog operations.
///
/// Implementations back the two lookups with different sources (live HTTP
/// catalog, canned demo data, scripted test data). Providers report typed
/// errors; absorption into empty results happens in [`crate::CatalogClient`].
#[async_trait]
pub trait CatalogProvider: Send + Sync + std::fmt::Debug {
    /// Free-text title search returning partial records, possibly empty.
    ///
    /// # Errors
    /// - `CatalogError::SearchRejected` - Catalog flagged the request as failed
    /// - `CatalogError::Network` - Transport failure
    /// - `CatalogError::Parse` - Response did not match the wire shape
    async fn search(
        &self,
        term: &str,
        media_type: MediaType,
        year: Option<&str>,
    ) -> Result<Vec<MovieSummary>, CatalogError>;

    /// Full-record lookup by catalog id; `None` when the id is unknown.
    ///
    /// # Errors
    /// - `CatalogError::Network` - Transport failure
    /// - `CatalogError::Parse` - Response did not match the wire shape
    async fn lookup(&self, imdb_id: &str) -> Result<Option<MovieDetail>, CatalogError>;
}
