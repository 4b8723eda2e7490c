//! Plain-text rendering of search states, profiles and evolution trees.

use std::fmt::Write;
use unfold_core::evolution::EvolutionStage;
use unfold_core::profile::CreatureProfile;
use unfold_core::{CatalogEntry, SearchState};

/// One entry per line: `#025  Pikachu`.
pub fn render_entries(entries: &[CatalogEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "#{:03}  {}", entry.id(), entry.formatted_name());
    }
    out
}

pub fn render_state(state: &SearchState) -> String {
    match state {
        SearchState::Idle => "Type to search.\n".to_string(),
        SearchState::Searching { query } => format!("Searching for {query:?}...\n"),
        SearchState::Results { query, entries } => {
            let mut out = format!("{} result(s) for {query:?}\n", entries.len());
            out.push_str(&render_entries(entries));
            out
        }
        SearchState::NoResults { query, suggestions } if suggestions.is_empty() => {
            format!("No results for {query:?}.\n")
        }
        SearchState::NoResults { query, suggestions } => {
            let mut out = format!("No results for {query:?}. Did you mean:\n");
            out.push_str(&render_entries(suggestions));
            out
        }
        SearchState::Failed { query, error } => format!("Search for {query:?} failed: {error}\n"),
    }
}

/// Indented tree, two spaces per level. Non-root stages show how they are
/// reached in brackets.
pub fn render_tree(root: &EvolutionStage) -> String {
    let mut out = String::new();
    for (depth, stage) in root.flatten() {
        let indent = "  ".repeat(depth);
        let marker = if depth == 0 { "" } else { "└ " };
        let _ = write!(out, "{indent}{marker}{}", stage.display_name);
        if let Some(id) = stage.species_id {
            let _ = write!(out, " #{id:03}");
        }
        if let Some(summary) = &stage.requirement_summary {
            let _ = write!(out, " [{summary}]");
        }
        out.push('\n');
    }
    out
}

/// Heights arrive in decimetres and weights in hectograms.
pub fn render_profile(profile: &CreatureProfile) -> String {
    let detail = &profile.detail;
    let species = &profile.species;
    let mut out = String::new();

    let _ = writeln!(out, "#{:03} {}", detail.id(), detail.entry.formatted_name());
    let _ = writeln!(out, "{}", species.category());
    let _ = writeln!(out, "Types:  {}", detail.type_names().join(" / "));
    let _ = writeln!(
        out,
        "Height: {:.1} m   Weight: {:.1} kg",
        f64::from(detail.height) / 10.0,
        f64::from(detail.weight) / 10.0
    );

    let mut flags = Vec::new();
    if species.is_baby {
        flags.push("Baby");
    }
    if species.is_legendary {
        flags.push("Legendary");
    }
    if species.is_mythical {
        flags.push("Mythical");
    }
    if !flags.is_empty() {
        let _ = writeln!(out, "Status: {}", flags.join(", "));
    }

    let _ = writeln!(out, "\n{}", species.english_description());

    if !detail.stats.is_empty() {
        out.push_str("\nBase stats:\n");
        for stat in &detail.stats {
            let _ = writeln!(out, "  {:<16}{:>4}", stat.name, stat.base_stat);
        }
    }

    match profile.evolution.as_ref().and_then(|chain| chain.root()) {
        Some(root) if !root.is_final() => {
            out.push_str("\nEvolution:\n");
            out.push_str(&render_tree(root));
        }
        Some(_) => out.push_str("\nDoes not evolve.\n"),
        None => {}
    }
    out
}
