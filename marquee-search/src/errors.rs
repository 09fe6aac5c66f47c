//! Error types for catalog operations.

use thiserror::Error;

/// Errors that can occur when talking to the movie catalog.
///
/// The catalog reports all failures through a single success/failure
/// discriminant with a message, so variants carry free-text reasons rather
/// than structured codes.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog flagged the request as failed (quota, malformed term, or
    /// genuinely zero results — the wire shape does not distinguish).
    #[error("catalog rejected search '{query}': {reason}")]
    SearchRejected {
        /// The search term that was rejected
        query: String,
        /// The catalog's error message
        reason: String,
    },

    /// Transport-level failure reaching the catalog.
    #[error("network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// Response body did not match the expected wire shape.
    #[error("parse error: {reason}")]
    Parse {
        /// The reason for the parse error
        reason: String,
    },
}
