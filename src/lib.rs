//! unfold — creature catalog lookup.
//!
//! Fuzzy search over the catalog, evolution trees, recent searches and
//! bookmarks. This crate re-exports the two workspace layers so that
//! integration tests and the driver binary import from one place.
//!
//! # Architecture
//!
//! ```text
//! unfold-api (HTTP) ──► Catalog ──► SearchSession ──► report
//!                          │
//!                          └──► load_profile ──► EvolutionChain ──► report
//! ```
//!
//! Everything stateful (debounce timer, recent searches, index load) runs on
//! the session actor. [`report`] turns the resulting values into text.

pub mod report;

pub use unfold_api::{ApiClient, ApiError};
pub use unfold_core::*;
