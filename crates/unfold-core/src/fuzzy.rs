//! Fuzzy matcher — ranks catalog entries against a possibly misspelled query.
//!
//! Every candidate is scored with [`similarity`](crate::similarity::similarity)
//! on lower-cased names. Candidates above the accept threshold form the
//! result list; only when that list is empty is a second, looser pass run to
//! produce "did you mean" suggestions.

use crate::config::SearchConfig;
use crate::similarity::similarity;
use crate::CatalogEntry;
use std::cmp::Ordering;

pub const DEFAULT_ACCEPT_THRESHOLD: f64 = 0.6;
pub const DEFAULT_SUGGEST_THRESHOLD: f64 = 0.4;
pub const DEFAULT_MAX_ACCEPTED: usize = 20;
pub const DEFAULT_MAX_SUGGESTED: usize = 5;

/// A candidate together with its similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub entry: CatalogEntry,
    pub score: f64,
}

/// Outcome of one fuzzy match.
///
/// `suggested` is always empty when `accepted` is not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOutcome {
    pub accepted: Vec<Scored>,
    pub suggested: Vec<Scored>,
}

impl MatchOutcome {
    pub fn accepted_entries(&self) -> Vec<CatalogEntry> {
        self.accepted.iter().map(|s| s.entry.clone()).collect()
    }

    pub fn suggested_entries(&self) -> Vec<CatalogEntry> {
        self.suggested.iter().map(|s| s.entry.clone()).collect()
    }
}

/// Thresholds and result caps. Scores must be strictly greater than a
/// threshold to pass it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatcher {
    pub accept_threshold: f64,
    pub suggest_threshold: f64,
    pub max_accepted: usize,
    pub max_suggested: usize,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            accept_threshold: DEFAULT_ACCEPT_THRESHOLD,
            suggest_threshold: DEFAULT_SUGGEST_THRESHOLD,
            max_accepted: DEFAULT_MAX_ACCEPTED,
            max_suggested: DEFAULT_MAX_SUGGESTED,
        }
    }
}

impl From<&SearchConfig> for FuzzyMatcher {
    fn from(cfg: &SearchConfig) -> Self {
        Self {
            accept_threshold: cfg.accept_threshold,
            suggest_threshold: cfg.suggest_threshold,
            max_accepted: cfg.max_accepted,
            max_suggested: cfg.max_suggested,
        }
    }
}

impl FuzzyMatcher {
    /// Rank `candidates` against `query`.
    ///
    /// An empty query matches nothing; callers show a default list instead.
    pub fn matches(&self, query: &str, candidates: &[CatalogEntry]) -> MatchOutcome {
        if query.is_empty() {
            return MatchOutcome::default();
        }

        let query = query.to_lowercase();
        let scored: Vec<Scored> = candidates
            .iter()
            .map(|entry| Scored {
                score: similarity(&query, &entry.name().to_lowercase()),
                entry: entry.clone(),
            })
            .collect();

        let accepted = top(&scored, self.accept_threshold, self.max_accepted);
        let suggested = if accepted.is_empty() {
            top(&scored, self.suggest_threshold, self.max_suggested)
        } else {
            Vec::new()
        };

        MatchOutcome { accepted, suggested }
    }
}

/// Entries scoring above `threshold`, best first, at most `limit` of them.
/// Ties keep candidate order (`sort_by` is stable).
fn top(scored: &[Scored], threshold: f64, limit: usize) -> Vec<Scored> {
    let mut hits: Vec<Scored> = scored
        .iter()
        .filter(|s| s.score > threshold)
        .cloned()
        .collect();
    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    hits.truncate(limit);
    hits
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
