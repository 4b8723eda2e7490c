//! Domain-specific assertion macros for unfold harnesses.
//!
//! These add context-rich failure messages that make it clear which search
//! state was expected and what the session actually settled on.

use unfold_core::{CatalogEntry, SearchState};

/// Names of `entries`, in order.
pub fn names(entries: &[CatalogEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name()).collect()
}

// ---------------------------------------------------------------------------
// Search state assertions
// ---------------------------------------------------------------------------

/// Assert that a `SearchState` is `Results` with exactly these names, in order.
///
/// ```rust
/// assert_results!(state, ["pikachu"]);
/// ```
#[macro_export]
macro_rules! assert_results {
    ($state:expr, [$($name:expr),* $(,)?]) => {{
        let state: &unfold_core::SearchState = &$state;
        let expected: Vec<&str> = vec![$($name),*];
        match state {
            unfold_core::SearchState::Results { entries, .. } => {
                let actual = $crate::common::names(entries);
                if actual != expected {
                    panic!(
                        "assert_results! failed:\n  expected: {:?}\n  actual:   {:?}",
                        expected, actual
                    );
                }
            }
            other => panic!("assert_results! failed: expected Results, got {:?}", other),
        }
    }};
}

/// Assert that a `SearchState` is `NoResults` with exactly these suggestions.
#[macro_export]
macro_rules! assert_no_results {
    ($state:expr, [$($name:expr),* $(,)?]) => {{
        let state: &unfold_core::SearchState = &$state;
        let expected: Vec<&str> = vec![$($name),*];
        match state {
            unfold_core::SearchState::NoResults { suggestions, .. } => {
                let actual = $crate::common::names(suggestions);
                if actual != expected {
                    panic!(
                        "assert_no_results! failed:\n  expected suggestions: {:?}\n  actual:               {:?}",
                        expected, actual
                    );
                }
            }
            other => panic!("assert_no_results! failed: expected NoResults, got {:?}", other),
        }
    }};
}

/// Assert that a `SearchState` is `Failed`.
#[macro_export]
macro_rules! assert_failed {
    ($state:expr) => {{
        let state: &unfold_core::SearchState = &$state;
        if !matches!(state, unfold_core::SearchState::Failed { .. }) {
            panic!("assert_failed! failed: expected Failed, got {:?}", state);
        }
    }};
}

/// Panic unless `state` belongs to `query`.
pub fn assert_query(state: &SearchState, query: &str) {
    assert_eq!(
        state.query(),
        Some(query),
        "state belongs to a different query: {state:?}"
    );
}
