//! Profile loading — everything the detail view shows for one creature.
//!
//! detail ──► species ──► evolution chain
//!
//! The first two steps are required. The evolution chain is enrichment: a
//! fetch failure or malformed payload leaves `evolution` empty instead of
//! failing the load.

use crate::catalog::Catalog;
use crate::error::ProfileError;
use crate::evolution::{self, EvolutionChain};
use crate::types::{CreatureDetail, Species};

#[derive(Debug, Clone, PartialEq)]
pub struct CreatureProfile {
    pub detail: CreatureDetail,
    pub species: Species,
    pub evolution: Option<EvolutionChain>,
}

/// Load detail, species and (best-effort) evolution chain for `id_or_name`.
pub async fn load_profile<C: Catalog>(
    catalog: &C,
    id_or_name: &str,
) -> Result<CreatureProfile, ProfileError> {
    let key = id_or_name.trim().to_lowercase();
    let detail = catalog
        .fetch_exact(&key)
        .await
        .map_err(ProfileError::Lookup)?;
    let species = catalog
        .fetch_species(detail.id())
        .await
        .map_err(ProfileError::Species)?;

    let evolution = match species.evolution_chain_id() {
        Some(chain_id) => load_evolution(catalog, chain_id).await,
        None => {
            tracing::debug!(species = %species.name, "profile: species has no evolution chain");
            None
        }
    };

    Ok(CreatureProfile {
        detail,
        species,
        evolution,
    })
}

async fn load_evolution<C: Catalog>(catalog: &C, chain_id: u32) -> Option<EvolutionChain> {
    let root = match catalog.fetch_evolution_chain(chain_id).await {
        Ok(root) => root,
        Err(e) => {
            tracing::warn!(chain_id, error = %e, "profile: evolution fetch failed, continuing without it");
            return None;
        }
    };
    match evolution::build_chain(chain_id, &root) {
        Ok(chain) => Some(chain),
        Err(e) => {
            tracing::warn!(chain_id, error = %e, "profile: evolution chain rejected, continuing without it");
            None
        }
    }
}
