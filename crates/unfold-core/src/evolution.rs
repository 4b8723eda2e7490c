//! Evolution trees — converts the server's recursive chain into UI stages.
//!
//! # Shape
//!
//! ```text
//! EvolutionNode (raw)                 EvolutionStage (normalized)
//! ───────────────────                 ───────────────────────────
//! species{name,url}                   stage_key      = name
//! requirement?  ── summary of the     display_name   = Capitalized(name)
//!                  edge INTO this     species_id     = numeric url segment
//!                  node               requirement_summary (set by parent)
//! children[]                          children[]     (order preserved)
//! ```
//!
//! Requirement data always lives on the downstream node. The builder walks
//! the tree depth-first, post-order, and never limits depth or branching.

use crate::error::MalformedChainError;
use crate::types::capitalize;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Raw chain
// ---------------------------------------------------------------------------

/// Conditions gating the transition into a species.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvolutionRequirement {
    pub min_level: Option<u32>,
    pub trigger_name: Option<String>,
    pub item_name: Option<String>,
    pub time_of_day: Option<String>,
    pub min_happiness: Option<u32>,
    pub min_affection: Option<u32>,
    pub min_beauty: Option<u32>,
}

/// One link of the server-provided chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvolutionNode {
    pub species_name: String,
    pub species_ref: String,
    /// Requirement for evolving into this species; `None` for base forms.
    pub requirement: Option<EvolutionRequirement>,
    pub children: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn new(species_name: impl Into<String>, species_ref: impl Into<String>) -> Self {
        Self {
            species_name: species_name.into(),
            species_ref: species_ref.into(),
            requirement: None,
            children: Vec::new(),
        }
    }

    pub fn with_requirement(mut self, requirement: EvolutionRequirement) -> Self {
        self.requirement = Some(requirement);
        self
    }

    pub fn with_children(mut self, children: Vec<EvolutionNode>) -> Self {
        self.children = children;
        self
    }
}

// ---------------------------------------------------------------------------
// Normalized stages
// ---------------------------------------------------------------------------

/// One species in the normalized evolution tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionStage {
    /// Species name; stable identity of the stage.
    pub stage_key: String,
    pub display_name: String,
    pub species_id: Option<u32>,
    /// Filled by a later enrichment step from `species_id`.
    pub image_url: Option<String>,
    /// How this stage is reached from its parent. Always `None` on a root.
    pub requirement_summary: Option<String>,
    pub children: Vec<EvolutionStage>,
}

impl EvolutionStage {
    /// Number of stages on the longest root-to-leaf path, counting both ends.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(EvolutionStage::depth).max().unwrap_or(0)
    }

    /// Total number of stages in this subtree.
    pub fn stage_count(&self) -> usize {
        1 + self.children.iter().map(EvolutionStage::stage_count).sum::<usize>()
    }

    /// Flatten the subtree into `(depth, &stage)` pairs in pre-order.
    pub fn flatten(&self) -> Vec<(usize, &EvolutionStage)> {
        let mut out = Vec::new();
        flatten_into(self, 0, &mut out);
        out
    }

    /// Find a stage by key anywhere in the subtree.
    pub fn find(&self, stage_key: &str) -> Option<&EvolutionStage> {
        if self.stage_key == stage_key {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(stage_key))
    }

    pub fn is_final(&self) -> bool {
        self.children.is_empty()
    }
}

fn flatten_into<'a>(stage: &'a EvolutionStage, depth: usize, out: &mut Vec<(usize, &'a EvolutionStage)>) {
    out.push((depth, stage));
    for child in &stage.children {
        flatten_into(child, depth + 1, out);
    }
}

/// A built chain. `stages` holds exactly one root for a well-formed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionChain {
    pub chain_id: u32,
    pub stages: Vec<EvolutionStage>,
}

impl EvolutionChain {
    /// The root stage, if the chain has one.
    pub fn root(&self) -> Option<&EvolutionStage> {
        self.stages.first()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build the normalized tree rooted at `root`.
///
/// The root's own requirement is ignored: roots are never reached by
/// evolving. Fails with [`MalformedChainError`] when any node has a blank
/// species name.
pub fn build(root: &EvolutionNode) -> Result<EvolutionStage, MalformedChainError> {
    build_stage(root, 0, None)
}

/// Build `root` and wrap it as a single-element forest with its chain id.
pub fn build_chain(chain_id: u32, root: &EvolutionNode) -> Result<EvolutionChain, MalformedChainError> {
    let stage = build(root)?;
    tracing::debug!(
        chain_id,
        stages = stage.stage_count(),
        depth = stage.depth(),
        "evolution: chain built"
    );
    Ok(EvolutionChain {
        chain_id,
        stages: vec![stage],
    })
}

fn build_stage(
    node: &EvolutionNode,
    depth: usize,
    requirement_summary: Option<String>,
) -> Result<EvolutionStage, MalformedChainError> {
    if node.species_name.trim().is_empty() {
        return Err(MalformedChainError {
            depth,
            reason: format!("blank species name (ref {:?})", node.species_ref),
        });
    }

    let children = node
        .children
        .iter()
        .map(|child| build_stage(child, depth + 1, format_requirement(child.requirement.as_ref())))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EvolutionStage {
        stage_key: node.species_name.clone(),
        display_name: capitalize(&node.species_name),
        species_id: extract_id(&node.species_ref),
        image_url: None,
        requirement_summary,
        children,
    })
}

/// Last path segment of `reference` made only of digits, parsed.
///
/// `None` when there is no such segment; `0` is a real id here, never a
/// fallback. A last numeric segment too large for `u32` is also `None`;
/// earlier segments are not consulted.
pub fn extract_id(reference: &str) -> Option<u32> {
    reference
        .split('/')
        .rev()
        .find(|segment| !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|segment| segment.parse().ok())
}

/// Human-readable, comma-joined summary of a requirement.
///
/// Order: level, happiness, item, time of day. `None` in, `None` out; a
/// requirement with none of those fields reads "No special requirements".
pub fn format_requirement(requirement: Option<&EvolutionRequirement>) -> Option<String> {
    let req = requirement?;
    let mut parts: Vec<String> = Vec::new();

    if let Some(level) = req.min_level {
        parts.push(format!("Level {level}"));
    }
    if let Some(happiness) = req.min_happiness {
        parts.push(format!("Happiness {happiness}"));
    }
    if let Some(item) = &req.item_name {
        parts.push(format!("Use {}", capitalize(item)));
    }
    if let Some(time) = req.time_of_day.as_deref().filter(|t| !t.is_empty()) {
        parts.push(format!("During {time}"));
    }

    Some(if parts.is_empty() {
        "No special requirements".to_string()
    } else {
        parts.join(", ")
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
