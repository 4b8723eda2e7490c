//! Configuration types for unfold.
//!
//! [`Config::load`] reads `~/.config/unfold/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
accept_threshold  = 0.6
suggest_threshold = 0.4
max_accepted      = 20
max_suggested     = 5
debounce_ms       = 500
recent_limit      = 10

[api]
base_url     = "https://pokeapi.co/api/v2"
page_size    = 1000
timeout_secs = 30

[storage]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/unfold/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_accept_threshold")]
    pub accept_threshold: f64,
    #[serde(default = "default_suggest_threshold")]
    pub suggest_threshold: f64,
    #[serde(default = "default_max_accepted")]
    pub max_accepted: usize,
    #[serde(default = "default_max_suggested")]
    pub max_suggested: usize,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_accept_threshold() -> f64 { crate::fuzzy::DEFAULT_ACCEPT_THRESHOLD }
fn default_suggest_threshold() -> f64 { crate::fuzzy::DEFAULT_SUGGEST_THRESHOLD }
fn default_max_accepted() -> usize { crate::fuzzy::DEFAULT_MAX_ACCEPTED }
fn default_max_suggested() -> usize { crate::fuzzy::DEFAULT_MAX_SUGGESTED }
fn default_debounce_ms() -> u64 { 500 }
fn default_recent_limit() -> usize { crate::recent::DEFAULT_RECENT_LIMIT }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            accept_threshold: default_accept_threshold(),
            suggest_threshold: default_suggest_threshold(),
            max_accepted: default_max_accepted(),
            max_suggested: default_max_suggested(),
            debounce_ms: default_debounce_ms(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// `[api]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String { "https://pokeapi.co/api/v2".to_string() }
fn default_page_size() -> u32 { 1000 }
fn default_timeout_secs() -> u64 { 30 }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// `[storage]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Directory for persisted recent searches and bookmarks. Defaults to
    /// `$XDG_DATA_HOME/unfold`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(data_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/unfold/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load from an explicit path layered on the defaults. A missing file is
    /// not an error.
    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
        .join("unfold")
        .join("config.toml")
}

fn data_dir() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local").join("share"))
        .join("unfold")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
