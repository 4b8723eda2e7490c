//! Catalog — the remote data source the core consumes.
//!
//! Implementations own transport, pagination and response caching. The core
//! only sees typed records or a [`FetchError`].

use crate::error::FetchError;
use crate::evolution::EvolutionNode;
use crate::types::{CatalogEntry, CreatureDetail, Species};
use rand::Rng;
use std::future::Future;

/// Ids of the entries shown before the user types anything.
pub const POPULAR_IDS: [u32; 10] = [1, 4, 7, 25, 133, 6, 150, 151, 9, 39];

/// Highest id drawn by [`random_id`].
pub const RANDOM_ID_MAX: u32 = 898;

/// Remote catalog operations. Futures are `Send` so a session can drive
/// them from spawned tasks.
pub trait Catalog: Send + Sync + 'static {
    /// Look up one creature by numeric id or by exact (lower-case) name.
    fn fetch_exact(
        &self,
        id_or_name: &str,
    ) -> impl Future<Output = Result<CreatureDetail, FetchError>> + Send;

    /// Every entry in the catalog. Pagination is internal to the implementation.
    fn fetch_full_list(&self) -> impl Future<Output = Result<Vec<CatalogEntry>, FetchError>> + Send;

    fn fetch_species(&self, id: u32) -> impl Future<Output = Result<Species, FetchError>> + Send;

    /// Root of the evolution chain with the given id.
    fn fetch_evolution_chain(
        &self,
        id: u32,
    ) -> impl Future<Output = Result<EvolutionNode, FetchError>> + Send;
}

// ---------------------------------------------------------------------------
// SearchIndex
// ---------------------------------------------------------------------------

/// Full candidate list for fuzzy matching. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchIndex {
    entries: Vec<CatalogEntry>,
}

impl SearchIndex {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose ids are in [`POPULAR_IDS`], in index order.
    pub fn popular(&self) -> Vec<CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| POPULAR_IDS.contains(&e.id()))
            .cloned()
            .collect()
    }
}

/// Uniformly random id in `1..=RANDOM_ID_MAX`.
pub fn random_id<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(1..=RANDOM_ID_MAX)
}
