//! HTTP client for the creature catalog REST API.

use crate::error::{ApiError, Result};
use crate::wire::{ChainDto, CreatureDto, ListPage, SpeciesDto};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use unfold_core::config::ApiConfig;
use unfold_core::{Catalog, CatalogEntry, CreatureDetail, EvolutionNode, FetchError, Species};

/// Catalog backed by the public REST API.
///
/// Response bodies are memoized per URL for the lifetime of the client, so
/// repeated lookups of the same creature cost one request.
///
/// ```rust,no_run
/// use unfold_api::ApiClient;
/// use unfold_core::config::ApiConfig;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new(&ApiConfig::default())?;
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    base_url: String,
    base: Url,
    page_size: u32,
    client: Client,
    cache: Mutex<HashMap<String, Arc<str>>>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let base = Url::parse(&base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ApiError::BaseUrl(base_url.clone()))?;
        Ok(Self {
            base_url,
            base,
            page_size: config.page_size.max(1),
            client,
            cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of memoized response bodies.
    pub fn cached_responses(&self) -> usize {
        self.cache_lock().len()
    }

    // ==================== Endpoints ====================

    /// Look up one creature. The key is sent as a single escaped path
    /// segment, so `?`, `#` and `/` in it never reach another resource.
    pub async fn creature(&self, id_or_name: &str) -> Result<CreatureDetail> {
        let key = id_or_name.trim().to_lowercase();
        // `.` and `..` would be dropped as path segments.
        if key.is_empty() || key == "." || key == ".." {
            return Err(ApiError::NotFound(format!("creature key {key:?}")));
        }
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::BaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push("pokemon")
            .push(&key);
        let dto: CreatureDto = self.get_json(url.as_str()).await?;
        Ok(dto.into_detail(&self.base_url))
    }

    /// Walk every page of the list endpoint, following `next` links.
    pub async fn all_entries(&self) -> Result<Vec<CatalogEntry>> {
        let mut url = format!("{}/pokemon?limit={}&offset=0", self.base_url, self.page_size);
        let mut entries = Vec::new();
        let mut pages = 0usize;
        loop {
            let page: ListPage = self.get_json(&url).await?;
            pages += 1;
            entries.extend(page.entries());
            match page.next {
                Some(next) if next != url && !page.results.is_empty() => url = next,
                _ => break,
            }
        }
        tracing::debug!(entries = entries.len(), pages, "api: full list loaded");
        Ok(entries)
    }

    pub async fn species(&self, id: u32) -> Result<Species> {
        let url = format!("{}/pokemon-species/{}", self.base_url, id);
        let dto: SpeciesDto = self.get_json(&url).await?;
        Ok(dto.into())
    }

    pub async fn evolution_chain(&self, id: u32) -> Result<EvolutionNode> {
        let url = format!("{}/evolution-chain/{}", self.base_url, id);
        let dto: ChainDto = self.get_json(&url).await?;
        Ok(dto.chain.into())
    }

    // ==================== Helpers ====================

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_body(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_body(&self, url: &str) -> Result<Arc<str>> {
        let cached = self.cache_lock().get(url).cloned();
        if let Some(hit) = cached {
            tracing::trace!(url, "api: cache hit");
            return Ok(hit);
        }

        tracing::debug!(url, "api: GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Arc<str> = response.text().await?.into();
        self.cache_lock().insert(url.to_string(), Arc::clone(&body));
        Ok(body)
    }

    fn cache_lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<str>>> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Catalog for ApiClient {
    async fn fetch_exact(&self, id_or_name: &str) -> std::result::Result<CreatureDetail, FetchError> {
        Ok(self.creature(id_or_name).await?)
    }

    async fn fetch_full_list(&self) -> std::result::Result<Vec<CatalogEntry>, FetchError> {
        Ok(self.all_entries().await?)
    }

    async fn fetch_species(&self, id: u32) -> std::result::Result<Species, FetchError> {
        Ok(self.species(id).await?)
    }

    async fn fetch_evolution_chain(&self, id: u32) -> std::result::Result<EvolutionNode, FetchError> {
        Ok(self.evolution_chain(id).await?)
    }
}
