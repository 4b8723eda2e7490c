//! Test builders — ergonomic constructors for chains, requirements and
//! search configs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use super::fixtures::species_node;
use std::time::Duration;
use unfold_core::config::SearchConfig;
use unfold_core::evolution::{EvolutionNode, EvolutionRequirement};

// ---------------------------------------------------------------------------
// RequirementBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`EvolutionRequirement`].
///
/// ```rust
/// let req = RequirementBuilder::new().level(20).time("night").build();
/// ```
#[derive(Default)]
pub struct RequirementBuilder {
    inner: EvolutionRequirement,
}

impl RequirementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: u32) -> Self {
        self.inner.min_level = Some(level);
        self
    }

    pub fn happiness(mut self, happiness: u32) -> Self {
        self.inner.min_happiness = Some(happiness);
        self
    }

    pub fn affection(mut self, affection: u32) -> Self {
        self.inner.min_affection = Some(affection);
        self
    }

    pub fn beauty(mut self, beauty: u32) -> Self {
        self.inner.min_beauty = Some(beauty);
        self
    }

    pub fn item(mut self, item: impl Into<String>) -> Self {
        self.inner.item_name = Some(item.into());
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.inner.time_of_day = Some(time.into());
        self
    }

    pub fn trigger(mut self, trigger: impl Into<String>) -> Self {
        self.inner.trigger_name = Some(trigger.into());
        self
    }

    pub fn build(self) -> EvolutionRequirement {
        self.inner
    }
}

// ---------------------------------------------------------------------------
// Chain shapes
// ---------------------------------------------------------------------------

/// Linear chain `stage0 → stage1 → … → stage{len-1}`; stage `i` requires
/// level `i * 10`.
pub fn linear_chain(len: usize) -> EvolutionNode {
    assert!(len > 0, "linear_chain needs at least one stage");
    let mut node = species_node(&format!("stage{}", len - 1), len as u32);
    for i in (0..len - 1).rev() {
        let child = node.with_requirement(RequirementBuilder::new().level((i as u32 + 1) * 10).build());
        node = species_node(&format!("stage{i}"), i as u32 + 1).with_children(vec![child]);
    }
    node
}

/// Complete tree with `fanout` children per node, `depth` levels deep.
pub fn bushy_chain(fanout: usize, depth: usize) -> EvolutionNode {
    fn grow(prefix: String, fanout: usize, depth: usize, next_id: &mut u32) -> EvolutionNode {
        *next_id += 1;
        let node = species_node(&prefix, *next_id);
        if depth <= 1 {
            return node;
        }
        let children = (0..fanout)
            .map(|i| {
                grow(format!("{prefix}-{i}"), fanout, depth - 1, next_id)
                    .with_requirement(RequirementBuilder::new().level(i as u32 + 1).build())
            })
            .collect();
        node.with_children(children)
    }
    let mut next_id = 0;
    grow("root".to_string(), fanout, depth, &mut next_id)
}

// ---------------------------------------------------------------------------
// SearchConfigBuilder
// ---------------------------------------------------------------------------

/// Builder over [`SearchConfig::default`].
pub struct SearchConfigBuilder {
    inner: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            inner: SearchConfig::default(),
        }
    }

    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.inner.debounce_ms = debounce.as_millis() as u64;
        self
    }

    pub fn recent_limit(mut self, limit: usize) -> Self {
        self.inner.recent_limit = limit;
        self
    }

    pub fn max_accepted(mut self, max: usize) -> Self {
        self.inner.max_accepted = max;
        self
    }

    pub fn build(self) -> SearchConfig {
        self.inner
    }
}
