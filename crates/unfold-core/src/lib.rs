//! unfold-core — catalog lookup core library.
//!
//! This crate holds the data transformation layer and the search session,
//! plus the shared types used across all layers. It performs no network I/O
//! itself: remote data arrives through the [`Catalog`] trait.
//!
//! # Architecture
//!
//! ```text
//! similarity ──► fuzzy ──► session ◄── catalog (trait) ◄── unfold-api
//!                            │
//!                            └──► recent ──► store
//!
//! evolution ──► profile ◄── catalog
//! ```

pub mod bookmarks;
pub mod catalog;
pub mod config;
pub mod error;
pub mod evolution;
pub mod fuzzy;
pub mod profile;
pub mod recent;
pub mod session;
pub mod similarity;
pub mod store;
pub mod types;

pub use catalog::{Catalog, SearchIndex};
pub use error::{FetchError, MalformedChainError, ProfileError, StoreError};
pub use evolution::{EvolutionChain, EvolutionNode, EvolutionRequirement, EvolutionStage};
pub use fuzzy::{FuzzyMatcher, MatchOutcome, Scored};
pub use session::{SearchHandle, SearchSession, SearchState};
pub use types::{CatalogEntry, CreatureDetail, Species};
