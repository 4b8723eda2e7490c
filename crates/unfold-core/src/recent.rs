//! Recent searches — bounded, de-duplicated, most-recent-first.

use crate::error::StoreError;
use crate::store::KeyValueStore;
use crate::CatalogEntry;
use std::collections::HashSet;

/// Store key holding the JSON-encoded list.
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Recent search list backed by a [`KeyValueStore`].
///
/// Entries are unique by id. A persistence failure is logged and the
/// in-memory list stays authoritative for the rest of the session.
pub struct RecentSearches<S> {
    entries: Vec<CatalogEntry>,
    limit: usize,
    store: S,
}

impl<S: KeyValueStore> RecentSearches<S> {
    /// Load the list from `store`. A missing or unreadable payload loads as
    /// empty; repeated ids keep their first (most recent) occurrence.
    pub fn load(store: S, limit: usize) -> Self {
        let mut entries: Vec<CatalogEntry> = store
            .get(RECENT_SEARCHES_KEY)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(entries) => Some(entries),
                Err(e) => {
                    tracing::warn!(error = %e, "recent: discarding unreadable payload");
                    None
                }
            })
            .unwrap_or_default();
        let mut seen = HashSet::new();
        entries.retain(|e| seen.insert(e.id()));
        entries.truncate(limit);
        Self { entries, limit, store }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Move `entry` to the front, dropping any older entry with the same id,
    /// truncate to the limit, and persist.
    pub fn record(&mut self, entry: CatalogEntry) {
        self.entries.retain(|e| e.id() != entry.id());
        self.entries.insert(0, entry);
        self.entries.truncate(self.limit);
        tracing::debug!(len = self.entries.len(), "recent: recorded");
        self.persist();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.entries)
            .map_err(StoreError::from)
            .and_then(|json| self.store.set(RECENT_SEARCHES_KEY, &json));
        if let Err(e) = result {
            tracing::warn!(error = %e, "recent: failed to persist");
        }
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
