//! Static catalog corpora used across harnesses.
//!
//! `CATALOG` mirrors the first entries of the real list endpoint plus a few
//! well-known later ones, so popular ids and branching chains are covered.

use unfold_core::evolution::{EvolutionNode, EvolutionRequirement};
use unfold_core::types::{Stat, TypeSlot};
use unfold_core::{CatalogEntry, CreatureDetail};

pub const BASE_REF: &str = "https://pokeapi.co/api/v2";

/// `(id, name)` pairs in list order.
pub const CATALOG: &[(u32, &str)] = &[
    (1, "bulbasaur"),
    (2, "ivysaur"),
    (3, "venusaur"),
    (4, "charmander"),
    (5, "charmeleon"),
    (6, "charizard"),
    (7, "squirtle"),
    (8, "wartortle"),
    (9, "blastoise"),
    (25, "pikachu"),
    (26, "raichu"),
    (39, "jigglypuff"),
    (133, "eevee"),
    (134, "vaporeon"),
    (135, "jolteon"),
    (136, "flareon"),
    (150, "mewtwo"),
    (151, "mew"),
    (172, "pichu"),
    (785, "tapu-koko"),
];

/// Names that are not in `CATALOG` and score low against every entry.
pub const GIBBERISH: &[&str] = &["zzzzzz", "qwxqwx", "xxxxxxxxxxxx"];

pub fn entry(name: &str, id: u32) -> CatalogEntry {
    CatalogEntry::new(name, format!("{BASE_REF}/pokemon/{id}/"))
}

pub fn catalog_entries() -> Vec<CatalogEntry> {
    CATALOG.iter().map(|&(id, name)| entry(name, id)).collect()
}

/// Minimal detail record for `name`/`id`.
pub fn detail(name: &str, id: u32) -> CreatureDetail {
    CreatureDetail {
        entry: entry(name, id),
        height: 4,
        weight: 60,
        types: vec![TypeSlot {
            slot: 1,
            name: "normal".into(),
        }],
        stats: vec![Stat {
            name: "hp".into(),
            base_stat: 35,
            effort: 0,
        }],
        sprite_url: format!("https://img.example/{id}.png"),
        artwork_url: None,
    }
}

pub fn species_node(name: &str, id: u32) -> EvolutionNode {
    EvolutionNode::new(name, format!("{BASE_REF}/pokemon-species/{id}/"))
}

pub fn level_up(level: u32) -> EvolutionRequirement {
    EvolutionRequirement {
        min_level: Some(level),
        trigger_name: Some("level-up".into()),
        ..Default::default()
    }
}

pub fn use_item(item: &str) -> EvolutionRequirement {
    EvolutionRequirement {
        item_name: Some(item.into()),
        trigger_name: Some("use-item".into()),
        ..Default::default()
    }
}

/// bulbasaur → ivysaur (Level 16) → venusaur (Level 32)
pub fn bulbasaur_chain() -> EvolutionNode {
    species_node("bulbasaur", 1).with_children(vec![species_node("ivysaur", 2)
        .with_requirement(level_up(16))
        .with_children(vec![species_node("venusaur", 3).with_requirement(level_up(32))])])
}

/// eevee with three stone evolutions.
pub fn eevee_chain() -> EvolutionNode {
    species_node("eevee", 133).with_children(vec![
        species_node("vaporeon", 134).with_requirement(use_item("water-stone")),
        species_node("jolteon", 135).with_requirement(use_item("thunder-stone")),
        species_node("flareon", 136).with_requirement(use_item("fire-stone")),
    ])
}

// ---------------------------------------------------------------------------
// Wire payloads for the fake REST server
// ---------------------------------------------------------------------------

pub fn creature_json(base_url: &str, name: &str, id: u32) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "height": 4,
        "weight": 60,
        "sprites": {
            "front_default": format!("{base_url}/sprites/{id}.png"),
            "other": { "official-artwork": { "front_default": format!("{base_url}/artwork/{id}.png") } }
        },
        "types": [
            { "slot": 2, "type": { "name": "poison", "url": "" } },
            { "slot": 1, "type": { "name": "grass", "url": "" } }
        ],
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 49, "effort": 0, "stat": { "name": "attack", "url": "" } }
        ]
    })
}

pub fn species_json(base_url: &str, name: &str, id: u32, chain_id: u32) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "evolution_chain": { "url": format!("{base_url}/evolution-chain/{chain_id}/") },
        "flavor_text_entries": [
            { "flavor_text": "Une graine étrange.", "language": { "name": "fr", "url": "" } },
            { "flavor_text": "A strange seed was\nplanted on its\u{0c}back at birth.", "language": { "name": "en", "url": "" } }
        ],
        "genera": [
            { "genus": "Seed Pokémon", "language": { "name": "en", "url": "" } }
        ],
        "is_baby": false,
        "is_legendary": false,
        "is_mythical": false
    })
}

/// Wire form of [`bulbasaur_chain`].
pub fn bulbasaur_chain_json(base_url: &str) -> serde_json::Value {
    let species = |name: &str, id: u32| {
        serde_json::json!({ "name": name, "url": format!("{base_url}/pokemon-species/{id}/") })
    };
    let level = |n: u32| {
        serde_json::json!([{
            "min_level": n,
            "trigger": { "name": "level-up", "url": "" },
            "item": null,
            "time_of_day": "",
            "min_happiness": null
        }])
    };
    serde_json::json!({
        "id": 1,
        "chain": {
            "species": species("bulbasaur", 1),
            "evolution_details": [],
            "evolves_to": [{
                "species": species("ivysaur", 2),
                "evolution_details": level(16),
                "evolves_to": [{
                    "species": species("venusaur", 3),
                    "evolution_details": level(32),
                    "evolves_to": []
                }]
            }]
        }
    })
}
