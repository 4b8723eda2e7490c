//! Search session — debounced lookup with fuzzy fallback and recent searches.
//!
//! # Architecture
//!
//! ```text
//! SearchHandle ──commands──► SessionActor ──spawn──► search task ──outcome──┐
//!      ▲                        │    ▲                                      │
//!      └──── watch<SearchState> ┘    └──────────────────────────────────────┘
//!                               │
//!                               └──spawn──► index loader ──► watch<IndexState>
//! ```
//!
//! The actor task owns all mutable state (recent searches, the query
//! generation, the pending debounce deadline). Search tasks only read an
//! immutable [`SearchIndex`] snapshot and report back over a channel; the
//! actor applies an outcome only if its generation is still current.
//!
//! Generations are assigned by the handle at submit time, so a caller can
//! wait for the outcome of the text it just submitted even when that text
//! matches the previous query. Every non-`Searching` state is followed by a
//! settled-generation update.
//!
//! # States
//!
//! `Idle` → (debounce fires) → `Searching` → `Results` | `NoResults` | `Failed`

use crate::catalog::{Catalog, SearchIndex};
use crate::config::SearchConfig;
use crate::error::FetchError;
use crate::fuzzy::FuzzyMatcher;
use crate::recent::RecentSearches;
use crate::store::KeyValueStore;
use crate::CatalogEntry;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

// ---------------------------------------------------------------------------
// Public state
// ---------------------------------------------------------------------------

/// What the search box should currently display.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// Empty query; the UI shows recent and popular entries.
    Idle,
    Searching {
        query: String,
    },
    Results {
        query: String,
        entries: Vec<CatalogEntry>,
    },
    /// Nothing matched. `suggestions` holds "did you mean" candidates.
    NoResults {
        query: String,
        suggestions: Vec<CatalogEntry>,
    },
    Failed {
        query: String,
        error: FetchError,
    },
}

impl SearchState {
    pub fn query(&self) -> Option<&str> {
        match self {
            SearchState::Idle => None,
            SearchState::Searching { query }
            | SearchState::Results { query, .. }
            | SearchState::NoResults { query, .. }
            | SearchState::Failed { query, .. } => Some(query),
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self, SearchState::Searching { .. })
    }

    /// Result entries, empty for every state but `Results`.
    pub fn entries(&self) -> &[CatalogEntry] {
        match self {
            SearchState::Results { entries, .. } => entries,
            _ => &[],
        }
    }

    pub fn suggestions(&self) -> &[CatalogEntry] {
        match self {
            SearchState::NoResults { suggestions, .. } => suggestions,
            _ => &[],
        }
    }
}

/// Availability of the full candidate list.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexState {
    Loading,
    Ready(Arc<SearchIndex>),
    /// The last load failed; the next non-empty query retries it.
    Unavailable(FetchError),
}

// ---------------------------------------------------------------------------
// Handle
// ---------------------------------------------------------------------------

enum Command {
    Submit { text: String, generation: u64 },
    Record(CatalogEntry),
    ClearRecent,
    Recent(oneshot::Sender<Vec<CatalogEntry>>),
}

/// Cloneable handle to a running session. The session stops when the last
/// handle is dropped.
#[derive(Clone)]
pub struct SearchHandle {
    commands: mpsc::UnboundedSender<Command>,
    /// Last generation handed out; shared by every clone.
    submitted: Arc<Mutex<u64>>,
    state: watch::Receiver<SearchState>,
    settled: watch::Receiver<u64>,
    index: watch::Receiver<IndexState>,
}

impl SearchHandle {
    /// Submit the current text of the search box. Rapid calls are coalesced;
    /// only the last one within the debounce window runs.
    pub fn submit_query(&self, text: impl Into<String>) {
        // Held across the send so generations reach the actor in order.
        let mut submitted = self.submitted.lock().unwrap_or_else(|p| p.into_inner());
        *submitted += 1;
        self.send(Command::Submit {
            text: text.into(),
            generation: *submitted,
        });
    }

    /// Move `entry` to the front of the recent searches.
    pub fn record_search(&self, entry: CatalogEntry) {
        self.send(Command::Record(entry));
    }

    pub fn clear_recent(&self) {
        self.send(Command::ClearRecent);
    }

    /// Snapshot of the recent searches, most recent first.
    pub async fn recent(&self) -> Vec<CatalogEntry> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Recent(tx));
        rx.await.unwrap_or_default()
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.clone()
    }

    /// Wait until the most recently submitted query has settled, then return
    /// the current state. An empty submission settles as `Idle` at once.
    pub async fn settled(&self) -> SearchState {
        let target = *self.submitted.lock().unwrap_or_else(|p| p.into_inner());
        let mut rx = self.settled.clone();
        if rx.wait_for(|g| *g >= target).await.is_err() {
            tracing::debug!(target, "session: actor stopped before settling");
        }
        self.state()
    }

    pub fn index_state(&self) -> IndexState {
        self.index.borrow().clone()
    }

    /// Entries from the popular list, once the index has loaded.
    pub fn popular(&self) -> Vec<CatalogEntry> {
        match &*self.index.borrow() {
            IndexState::Ready(index) => index.popular(),
            _ => Vec::new(),
        }
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            tracing::debug!("session: command dropped, actor has stopped");
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Entry point for starting a search session.
pub struct SearchSession;

impl SearchSession {
    /// Spawn the session actor on the current tokio runtime and start loading
    /// the full candidate list.
    pub fn spawn<C, S>(catalog: C, store: S, config: &SearchConfig) -> SearchHandle
    where
        C: Catalog,
        S: KeyValueStore + 'static,
    {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SearchState::Idle);
        let (settled_tx, settled_rx) = watch::channel(0u64);
        let (index_tx, index_rx) = watch::channel(IndexState::Loading);

        let actor = SessionActor {
            catalog: Arc::new(catalog),
            matcher: FuzzyMatcher::from(config),
            debounce: config.debounce(),
            recent: RecentSearches::load(store, config.recent_limit),
            state_tx,
            settled_tx,
            index_tx: Arc::new(index_tx),
            generation: 0,
            pending: None,
            in_flight: None,
            index_loader: None,
        };
        tokio::spawn(actor.run(commands_rx));

        SearchHandle {
            commands: commands_tx,
            submitted: Arc::new(Mutex::new(0)),
            state: state_rx,
            settled: settled_rx,
            index: index_rx,
        }
    }
}

struct SearchOutcome {
    generation: u64,
    state: SearchState,
    record: Option<CatalogEntry>,
}

struct SessionActor<C, S> {
    catalog: Arc<C>,
    matcher: FuzzyMatcher,
    debounce: Duration,
    recent: RecentSearches<S>,
    state_tx: watch::Sender<SearchState>,
    settled_tx: watch::Sender<u64>,
    index_tx: Arc<watch::Sender<IndexState>>,
    /// Generation of the last submitted query; outcomes from older
    /// generations are discarded.
    generation: u64,
    pending: Option<(String, Instant)>,
    in_flight: Option<JoinHandle<()>>,
    index_loader: Option<JoinHandle<()>>,
}

impl<C: Catalog, S: KeyValueStore + 'static> SessionActor<C, S> {
    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        let (outcome_tx, mut outcomes) = mpsc::unbounded_channel::<SearchOutcome>();
        self.start_index_load();

        loop {
            let deadline = self.pending.as_ref().map(|(_, at)| *at);
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.fire(&outcome_tx);
                }
                Some(outcome) = outcomes.recv() => self.apply(outcome),
            }
        }

        tracing::debug!("session: all handles dropped, stopping");
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
        if let Some(task) = self.index_loader.take() {
            task.abort();
        }
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Submit { text, generation } => self.submit(text, generation),
            Command::Record(entry) => self.recent.record(entry),
            Command::ClearRecent => self.recent.clear(),
            Command::Recent(reply) => {
                let _ = reply.send(self.recent.entries().to_vec());
            }
        }
    }

    fn submit(&mut self, text: String, generation: u64) {
        self.generation = generation;
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }

        let query = text.trim().to_string();
        if query.is_empty() {
            tracing::debug!(generation = self.generation, "session: empty query, idle");
            self.pending = None;
            self.publish(SearchState::Idle);
            return;
        }

        if matches!(*self.index_tx.borrow(), IndexState::Unavailable(_)) {
            self.start_index_load();
        }

        tracing::debug!(generation = self.generation, query = %query, "session: debouncing");
        self.pending = Some((query, Instant::now() + self.debounce));
    }

    /// Debounce window elapsed: run the pending query.
    fn fire(&mut self, outcome_tx: &mpsc::UnboundedSender<SearchOutcome>) {
        let Some((query, _)) = self.pending.take() else {
            return;
        };
        let generation = self.generation;
        tracing::debug!(generation, query = %query, "session: searching");
        self.publish(SearchState::Searching {
            query: query.clone(),
        });

        let catalog = Arc::clone(&self.catalog);
        let index = self.index_tx.subscribe();
        let matcher = self.matcher;
        let outcome_tx = outcome_tx.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let (state, record) = run_search(&*catalog, &query, index, &matcher).await;
            let _ = outcome_tx.send(SearchOutcome {
                generation,
                state,
                record,
            });
        }));
    }

    fn apply(&mut self, outcome: SearchOutcome) {
        if outcome.generation != self.generation {
            tracing::debug!(
                stale = outcome.generation,
                current = self.generation,
                "session: discarding superseded result"
            );
            return;
        }
        self.in_flight = None;
        if let Some(entry) = outcome.record {
            self.recent.record(entry);
        }
        tracing::info!(query = ?outcome.state.query(), results = outcome.state.entries().len(), "session: search settled");
        self.publish(outcome.state);
    }

    fn publish(&self, state: SearchState) {
        let settled = !state.is_searching();
        self.state_tx.send_replace(state);
        if settled {
            self.settled_tx.send_replace(self.generation);
        }
    }

    fn start_index_load(&mut self) {
        if let Some(task) = self.index_loader.take() {
            task.abort();
        }
        self.index_tx.send_replace(IndexState::Loading);

        let catalog = Arc::clone(&self.catalog);
        let index_tx = Arc::clone(&self.index_tx);
        self.index_loader = Some(tokio::spawn(async move {
            let state = match catalog.fetch_full_list().await {
                Ok(entries) => {
                    tracing::info!(entries = entries.len(), "session: search index loaded");
                    IndexState::Ready(Arc::new(SearchIndex::new(entries)))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "session: search index unavailable");
                    IndexState::Unavailable(e)
                }
            };
            index_tx.send_replace(state);
        }));
    }
}

/// Exact lookup first, then fuzzy matching over the index.
///
/// Returns the new state and the entry to record in recent searches.
async fn run_search<C: Catalog>(
    catalog: &C,
    query: &str,
    index: watch::Receiver<IndexState>,
    matcher: &FuzzyMatcher,
) -> (SearchState, Option<CatalogEntry>) {
    let query_owned = query.to_string();
    let lookup_err = match catalog.fetch_exact(&query.to_lowercase()).await {
        Ok(detail) => {
            tracing::debug!(query, id = detail.id(), "session: exact hit");
            let entry = detail.entry;
            return (
                SearchState::Results {
                    query: query_owned,
                    entries: vec![entry.clone()],
                },
                Some(entry),
            );
        }
        Err(e) => e,
    };
    tracing::debug!(query, error = %lookup_err, "session: exact miss, falling back to fuzzy");

    let Some(index) = ready_index(index).await else {
        // No candidate list: exact lookup was the only option.
        return if lookup_err.is_not_found() {
            (
                SearchState::NoResults {
                    query: query_owned,
                    suggestions: Vec::new(),
                },
                None,
            )
        } else {
            (
                SearchState::Failed {
                    query: query_owned,
                    error: lookup_err,
                },
                None,
            )
        };
    };

    let outcome = matcher.matches(query, index.entries());
    if outcome.accepted.is_empty() {
        (
            SearchState::NoResults {
                query: query_owned,
                suggestions: outcome.suggested_entries(),
            },
            None,
        )
    } else {
        let entries = outcome.accepted_entries();
        let top = entries.first().cloned();
        (
            SearchState::Results {
                query: query_owned,
                entries,
            },
            top,
        )
    }
}

/// Wait for the index load to finish. `None` if it failed.
async fn ready_index(mut index: watch::Receiver<IndexState>) -> Option<Arc<SearchIndex>> {
    let state = index
        .wait_for(|s| !matches!(s, IndexState::Loading))
        .await
        .ok()?;
    let ready = match &*state {
        IndexState::Ready(index) => Some(Arc::clone(index)),
        _ => None,
    };
    ready
}
