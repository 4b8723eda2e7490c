//! unfold-api — REST catalog client.
//!
//! [`ApiClient`] implements [`unfold_core::Catalog`] over HTTP. Wire DTOs live
//! in [`wire`] and never leave this crate except as core types.

pub mod client;
pub mod error;
pub mod wire;

pub use client::ApiClient;
pub use error::{ApiError, Result};
