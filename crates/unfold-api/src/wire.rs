//! Wire format of the catalog REST API and its conversion to core types.
//!
//! Only the fields the core uses are declared; serde ignores the rest.

use serde::Deserialize;
use unfold_core::evolution::{EvolutionNode, EvolutionRequirement};
use unfold_core::types::{FlavorText, Genus, Stat, TypeSlot};
use unfold_core::{CatalogEntry, CreatureDetail, Species};

/// `{ "name": ..., "url": ... }` reference used throughout the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// One page of `GET /pokemon?limit=&offset=`.
#[derive(Debug, Deserialize)]
pub struct ListPage {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

impl ListPage {
    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry> + '_ {
        self.results
            .iter()
            .map(|r| CatalogEntry::new(r.name.clone(), r.url.clone()))
    }
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

/// `GET /pokemon/{id or name}`.
#[derive(Debug, Deserialize)]
pub struct CreatureDto {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub sprites: SpritesDto,
    #[serde(default)]
    pub types: Vec<TypeSlotDto>,
    #[serde(default)]
    pub stats: Vec<StatDto>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpritesDto {
    pub front_default: Option<String>,
    pub other: Option<OtherSpritesDto>,
}

#[derive(Debug, Deserialize)]
pub struct OtherSpritesDto {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<ArtworkDto>,
}

#[derive(Debug, Deserialize)]
pub struct ArtworkDto {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlotDto {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct StatDto {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

impl CreatureDto {
    /// Convert to the core record. `base_url` is used to build the entry's
    /// canonical resource reference.
    pub fn into_detail(self, base_url: &str) -> CreatureDetail {
        let source_ref = format!("{}/pokemon/{}/", base_url.trim_end_matches('/'), self.id);
        let artwork_url = self
            .sprites
            .other
            .and_then(|o| o.official_artwork)
            .and_then(|a| a.front_default);
        CreatureDetail {
            entry: CatalogEntry::new(self.name, source_ref),
            height: self.height,
            weight: self.weight,
            types: self
                .types
                .into_iter()
                .map(|t| TypeSlot { slot: t.slot, name: t.kind.name })
                .collect(),
            stats: self
                .stats
                .into_iter()
                .map(|s| Stat { name: s.stat.name, base_stat: s.base_stat, effort: s.effort })
                .collect(),
            sprite_url: self.sprites.front_default.unwrap_or_default(),
            artwork_url,
        }
    }
}

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// `GET /pokemon-species/{id}`.
#[derive(Debug, Deserialize)]
pub struct SpeciesDto {
    pub id: u32,
    pub name: String,
    pub evolution_chain: Option<UrlRef>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextDto>,
    #[serde(default)]
    pub genera: Vec<GenusDto>,
    #[serde(default)]
    pub is_baby: bool,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
}

#[derive(Debug, Deserialize)]
pub struct UrlRef {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct FlavorTextDto {
    pub flavor_text: String,
    pub language: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct GenusDto {
    pub genus: String,
    pub language: NamedResource,
}

impl From<SpeciesDto> for Species {
    fn from(dto: SpeciesDto) -> Self {
        Species {
            id: dto.id,
            name: dto.name,
            evolution_chain_ref: dto.evolution_chain.map(|c| c.url).unwrap_or_default(),
            flavor_texts: dto
                .flavor_text_entries
                .into_iter()
                .map(|f| FlavorText { text: f.flavor_text, language: f.language.name })
                .collect(),
            genera: dto
                .genera
                .into_iter()
                .map(|g| Genus { genus: g.genus, language: g.language.name })
                .collect(),
            is_baby: dto.is_baby,
            is_legendary: dto.is_legendary,
            is_mythical: dto.is_mythical,
        }
    }
}

// ---------------------------------------------------------------------------
// Evolution chain
// ---------------------------------------------------------------------------

/// `GET /evolution-chain/{id}`.
#[derive(Debug, Deserialize)]
pub struct ChainDto {
    pub id: u32,
    pub chain: ChainLinkDto,
}

#[derive(Debug, Deserialize)]
pub struct ChainLinkDto {
    #[serde(default)]
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetailDto>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLinkDto>,
}

#[derive(Debug, Deserialize)]
pub struct EvolutionDetailDto {
    pub min_level: Option<u32>,
    pub trigger: Option<NamedResource>,
    pub item: Option<NamedResource>,
    pub time_of_day: Option<String>,
    pub min_happiness: Option<u32>,
    pub min_affection: Option<u32>,
    pub min_beauty: Option<u32>,
}

impl From<EvolutionDetailDto> for EvolutionRequirement {
    fn from(dto: EvolutionDetailDto) -> Self {
        EvolutionRequirement {
            min_level: dto.min_level,
            trigger_name: dto.trigger.map(|t| t.name),
            item_name: dto.item.map(|i| i.name),
            time_of_day: dto.time_of_day,
            min_happiness: dto.min_happiness,
            min_affection: dto.min_affection,
            min_beauty: dto.min_beauty,
        }
    }
}

impl From<ChainLinkDto> for EvolutionNode {
    /// Only the first evolution detail is kept; it describes the primary way
    /// into this species.
    fn from(link: ChainLinkDto) -> Self {
        EvolutionNode {
            species_name: link.species.name,
            species_ref: link.species.url,
            requirement: link.evolution_details.into_iter().next().map(Into::into),
            children: link.evolves_to.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
