//! Error types for unfold-core.

use thiserror::Error;

/// Failure reported by a [`Catalog`](crate::catalog::Catalog) fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The resource does not exist. Recoverable: search falls back to
    /// fuzzy matching.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request could not be completed (connection, status, decoding).
    #[error("transport error: {0}")]
    Transport(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}

/// The evolution payload violates its data contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed evolution chain at depth {depth}: {reason}")]
pub struct MalformedChainError {
    pub depth: usize,
    pub reason: String,
}

/// Persistence failure in a [`KeyValueStore`](crate::store::KeyValueStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failure loading a full creature profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("lookup failed: {0}")]
    Lookup(FetchError),

    #[error("species lookup failed: {0}")]
    Species(FetchError),
}
