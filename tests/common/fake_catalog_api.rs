//! Fake catalog REST API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves:
//! - `GET /pokemon?limit=&offset=` — paginated list with absolute `next` links
//! - `GET /pokemon/{id or name}` — creature detail
//! - `GET /pokemon-species/{id}` — species record
//! - `GET /evolution-chain/{id}` — evolution chain
//!
//! Unknown resources answer 404. Every request path (with query) is counted
//! so tests can assert on caching and pagination.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeCatalogApi::start().await.unwrap();
//! api.add_creature("bulbasaur", 1).await;
//! let client = ApiClient::new(&api.config(1000)).unwrap();
//! ```

use super::fixtures::{bulbasaur_chain_json, creature_json, species_json};
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use unfold_core::config::ApiConfig;

/// State shared between the router and test code.
#[derive(Default)]
struct ApiState {
    base_url: String,
    /// `(id, name)` in list order.
    list: Vec<(u32, String)>,
    creatures: HashMap<String, Value>,
    species: HashMap<u32, Value>,
    chains: HashMap<u32, Value>,
    /// Status code returned for every request while set.
    forced_status: Option<u16>,
    hits: HashMap<String, usize>,
}

/// Handle to the running fake catalog server.
pub struct FakeCatalogApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

#[derive(serde::Deserialize)]
struct Page {
    #[serde(default = "default_limit")]
    limit: usize,
    #[serde(default)]
    offset: usize,
}

fn default_limit() -> usize { 20 }

impl FakeCatalogApi {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState {
            base_url: format!("http://{addr}"),
            ..Default::default()
        }));

        let app = Router::new()
            .route("/pokemon", get(list))
            .route("/pokemon/{key}", get(creature))
            .route("/pokemon-species/{id}", get(species))
            .route("/evolution-chain/{id}", get(chain))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Client config pointed at this server.
    pub fn config(&self, page_size: u32) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url(),
            page_size,
            timeout_secs: 5,
        }
    }

    /// Register a creature: list entry, detail and a species pointing at
    /// evolution chain 1.
    pub async fn add_creature(&self, name: &str, id: u32) {
        let base = self.base_url();
        let mut state = self.state.lock().await;
        let body = creature_json(&base, name, id);
        state.list.push((id, name.to_string()));
        state.creatures.insert(name.to_string(), body.clone());
        state.creatures.insert(id.to_string(), body);
        state.species.insert(id, species_json(&base, name, id, 1));
    }

    /// Serve the bulbasaur chain as evolution chain 1.
    pub async fn add_bulbasaur_chain(&self) {
        let base = self.base_url();
        self.state.lock().await.chains.insert(1, bulbasaur_chain_json(&base));
    }

    pub async fn set_chain(&self, id: u32, body: Value) {
        self.state.lock().await.chains.insert(id, body);
    }

    /// Answer every request with `status` until cleared with `None`.
    pub async fn force_status(&self, status: Option<u16>) {
        self.state.lock().await.forced_status = status;
    }

    /// Number of requests whose path starts with `prefix`.
    pub async fn hits(&self, prefix: &str) -> usize {
        let state = self.state.lock().await;
        state
            .hits
            .iter()
            .filter(|(path, _)| path.starts_with(prefix))
            .map(|(_, n)| n)
            .sum()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

type Shared = State<Arc<Mutex<ApiState>>>;

/// Count the hit and return the forced status, if any.
fn record(state: &mut ApiState, uri: &Uri) -> Option<Response> {
    let key = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    *state.hits.entry(key).or_default() += 1;
    state.forced_status.map(|code| {
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, "forced failure").into_response()
    })
}

async fn list(State(state): Shared, uri: Uri, Query(page): Query<Page>) -> Response {
    let mut state = state.lock().await;
    if let Some(forced) = record(&mut state, &uri) {
        return forced;
    }
    let results: Vec<Value> = state
        .list
        .iter()
        .skip(page.offset)
        .take(page.limit)
        .map(|(id, name)| {
            serde_json::json!({ "name": name, "url": format!("{}/pokemon/{id}/", state.base_url) })
        })
        .collect();
    let next_offset = page.offset + page.limit;
    let next = (next_offset < state.list.len())
        .then(|| format!("{}/pokemon?limit={}&offset={next_offset}", state.base_url, page.limit));
    Json(serde_json::json!({
        "count": state.list.len(),
        "next": next,
        "previous": null,
        "results": results,
    }))
    .into_response()
}

async fn creature(State(state): Shared, uri: Uri, Path(key): Path<String>) -> Response {
    let mut state = state.lock().await;
    if let Some(forced) = record(&mut state, &uri) {
        return forced;
    }
    match state.creatures.get(&key) {
        Some(body) => Json(body.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn species(State(state): Shared, uri: Uri, Path(id): Path<u32>) -> Response {
    let mut state = state.lock().await;
    if let Some(forced) = record(&mut state, &uri) {
        return forced;
    }
    match state.species.get(&id) {
        Some(body) => Json(body.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn chain(State(state): Shared, uri: Uri, Path(id): Path<u32>) -> Response {
    let mut state = state.lock().await;
    if let Some(forced) = record(&mut state, &uri) {
        return forced;
    }
    match state.chains.get(&id) {
        Some(body) => Json(body.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}
