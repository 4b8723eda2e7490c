//! Bookmarks — the user's saved creature ids, in the order they were added.

use crate::store::KeyValueStore;

/// Store key holding the JSON array of bookmarked ids.
pub const BOOKMARKS_KEY: &str = "bookmarkedPokemon";

pub struct Bookmarks<S> {
    ids: Vec<u32>,
    store: S,
}

impl<S: KeyValueStore> Bookmarks<S> {
    /// Load bookmarks from `store`. A missing or unreadable payload loads as
    /// empty.
    pub fn load(store: S) -> Self {
        let ids = store
            .get(BOOKMARKS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { ids, store }
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Add `id` if absent, remove it if present. Returns the new state.
    pub fn toggle(&mut self, id: u32) -> bool {
        let bookmarked = if self.contains(id) {
            self.ids.retain(|&b| b != id);
            false
        } else {
            self.ids.push(id);
            true
        };
        tracing::debug!(id, bookmarked, "bookmarks: toggled");

        match serde_json::to_string(&self.ids) {
            Ok(json) => {
                if let Err(e) = self.store.set(BOOKMARKS_KEY, &json) {
                    tracing::warn!(error = %e, "bookmarks: failed to persist");
                }
            }
            Err(e) => tracing::warn!(error = %e, "bookmarks: failed to encode"),
        }
        bookmarked
    }
}
