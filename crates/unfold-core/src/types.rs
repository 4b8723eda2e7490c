//! Core types for unfold-core.
//!
//! This module defines the data shared across all layers: the lightweight
//! [`CatalogEntry`] used for lists and search results, the full
//! [`CreatureDetail`] returned by an exact lookup, and the [`Species`] record
//! that links a creature to its evolution chain.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CatalogEntry
// ---------------------------------------------------------------------------

/// One item of the catalog list, as shown in search results and the recent
/// searches list.
///
/// `id` is derived from the trailing numeric path segment of `source_ref`
/// and is `0` when that segment is missing or not numeric. Two entries are
/// equal iff `id` and `name` both match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "EntryRepr", into = "EntryRepr")]
pub struct CatalogEntry {
    id: u32,
    name: String,
    source_ref: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, source_ref: impl Into<String>) -> Self {
        let source_ref = source_ref.into();
        Self {
            id: entry_id_from_ref(&source_ref),
            name: name.into(),
            source_ref,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_ref(&self) -> &str {
        &self.source_ref
    }

    /// Display form of the name: hyphens become spaces and every word is
    /// capitalized (`"tapu-koko"` → `"Tapu Koko"`).
    pub fn formatted_name(&self) -> String {
        capitalize(&self.name.replace('-', " "))
    }
}

impl PartialEq for CatalogEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl Eq for CatalogEntry {}

/// Persisted shape of a [`CatalogEntry`]. `id` is written for readability
/// but always re-derived from `url` on load.
#[derive(Serialize, Deserialize)]
struct EntryRepr {
    #[serde(default)]
    id: u32,
    name: String,
    url: String,
}

impl From<EntryRepr> for CatalogEntry {
    fn from(repr: EntryRepr) -> Self {
        CatalogEntry::new(repr.name, repr.url)
    }
}

impl From<CatalogEntry> for EntryRepr {
    fn from(entry: CatalogEntry) -> Self {
        EntryRepr {
            id: entry.id,
            name: entry.name,
            url: entry.source_ref,
        }
    }
}

/// Parse the trailing numeric path segment of a resource URL, ignoring any
/// query string, fragment or trailing slash. Returns `0` on failure.
pub fn entry_id_from_ref(source_ref: &str) -> u32 {
    let path = source_ref
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    path.rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
        .unwrap_or(0)
}

/// Capitalize every word: first character upper-cased, the rest lower-cased.
/// Words are delimited by whitespace and hyphens, which are kept as-is.
pub fn capitalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() || c == '-' {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

// ---------------------------------------------------------------------------
// CreatureDetail
// ---------------------------------------------------------------------------

/// Full record returned by an exact lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureDetail {
    pub entry: CatalogEntry,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<Stat>,
    pub sprite_url: String,
    pub artwork_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSlot {
    pub slot: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub base_stat: u32,
    pub effort: u32,
}

impl CreatureDetail {
    pub fn id(&self) -> u32 {
        self.entry.id()
    }

    /// Official artwork when available, otherwise the default sprite.
    pub fn main_image_url(&self) -> &str {
        self.artwork_url.as_deref().unwrap_or(&self.sprite_url)
    }

    /// Type names ordered by slot, capitalized.
    pub fn type_names(&self) -> Vec<String> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| capitalize(&t.name)).collect()
    }

    /// Base value of the named stat, `0` when the creature has no such stat.
    pub fn stat_value(&self, name: &str) -> u32 {
        self.stats
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.base_stat)
            .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// Species record: flavour text, genus, and the link to the evolution chain.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Species {
    pub id: u32,
    pub name: String,
    pub evolution_chain_ref: String,
    pub flavor_texts: Vec<FlavorText>,
    pub genera: Vec<Genus>,
    pub is_baby: bool,
    pub is_legendary: bool,
    pub is_mythical: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlavorText {
    pub text: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genus {
    pub genus: String,
    pub language: String,
}

impl Species {
    /// Id of the evolution chain: the last path segment of the chain URL.
    pub fn evolution_chain_id(&self) -> Option<u32> {
        self.evolution_chain_ref
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }

    /// First English flavour text with layout characters flattened.
    pub fn english_description(&self) -> String {
        self.flavor_texts
            .iter()
            .find(|f| f.language == "en")
            .map(|f| {
                f.text
                    .replace('\n', " ")
                    .replace('\u{0C}', " ")
                    .replace("POKéMON", "Pokémon")
            })
            .unwrap_or_else(|| "No description available.".to_string())
    }

    /// English genus, e.g. "Mouse Pokémon".
    pub fn category(&self) -> String {
        self.genera
            .iter()
            .find(|g| g.language == "en")
            .map(|g| g.genus.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
