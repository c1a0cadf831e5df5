//! Catalog loading and remote bootstrap
//!
//! Resolution order: an explicit local catalog file wins; otherwise a
//! configured remote index is used through a cached local copy (refreshed
//! after a TTL); the embedded catalog is the last resort. Remote failures
//! degrade to the stale cached copy and then to the embedded catalog,
//! never to a hard error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::catalog::Catalog;
use crate::error::{NetworkError, Result, SkillError};

#[derive(Serialize, Deserialize)]
struct CachedCatalog {
    fetched_at: DateTime<Utc>,
    source_url: String,
    entries: serde_json::Map<String, serde_json::Value>,
}

pub struct CacheInfo {
    pub fetched_at: DateTime<Utc>,
    pub source_url: String,
    pub entry_count: usize,
    pub stale: bool,
}

pub struct CatalogStore {
    config: Config,
    client: reqwest::Client,
}

impl CatalogStore {
    pub fn new(config: &Config) -> Self {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("filmchest-cli v{} (https://github.com/musicdock/filmchest-cli)", version);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config: config.clone(),
            client,
        }
    }

    /// Load the catalog according to the configured sources.
    pub async fn load(&self) -> Result<Catalog> {
        if let Some(ref path) = self.config.catalog_path {
            info!("Loading catalog from file: {}", path.display());
            return Catalog::from_file(path);
        }

        if let Some(ref url) = self.config.catalog_url {
            if let Some(cached) = self.read_cache() {
                if !self.is_stale(&cached) {
                    debug!("Using cached catalog from {}", cached.source_url);
                    return Catalog::from_map(cached.entries);
                }
                debug!("Cached catalog is stale, refreshing");
            }

            match self.fetch(url).await {
                Ok(catalog) => return Ok(catalog),
                Err(e) => {
                    warn!("Catalog fetch failed ({}), falling back", e);
                    if let Some(cached) = self.read_cache() {
                        warn!("Using stale cached catalog from {}", cached.fetched_at);
                        return Catalog::from_map(cached.entries);
                    }
                }
            }

            warn!("No cached catalog available, using embedded catalog");
        }

        Catalog::embedded()
    }

    /// Force a refetch of the remote index, bypassing the TTL.
    pub async fn refresh(&self) -> Result<Catalog> {
        let url = self
            .config
            .catalog_url
            .as_deref()
            .ok_or(SkillError::Network(NetworkError::NoRemoteConfigured))?;
        self.fetch(url).await
    }

    /// Metadata about the cached remote copy, if one exists.
    pub fn cache_info(&self) -> Option<CacheInfo> {
        let cached = self.read_cache()?;
        Some(CacheInfo {
            stale: self.is_stale(&cached),
            entry_count: cached.entries.len(),
            fetched_at: cached.fetched_at,
            source_url: cached.source_url,
        })
    }

    pub fn clear_cache(&self) -> Result<()> {
        let path = self.config.catalog_cache_path();
        if path.exists() {
            fs::remove_file(&path)?;
            info!("Removed cached catalog at {}", path.display());
        }
        Ok(())
    }

    async fn fetch(&self, url: &str) -> Result<Catalog> {
        info!("Fetching catalog index from {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(SkillError::Network(NetworkError::InvalidResponse {
                reason: format!("status {}", response.status()),
            }));
        }

        let entries: serde_json::Map<String, serde_json::Value> = response.json().await?;
        let catalog = Catalog::from_map(entries.clone())?;

        if let Err(e) = self.write_cache(url, entries) {
            warn!("Failed to cache fetched catalog: {}", e);
        }

        Ok(catalog)
    }

    fn read_cache(&self) -> Option<CachedCatalog> {
        let path = self.config.catalog_cache_path();
        if !path.exists() {
            return None;
        }
        let content = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&content) {
            Ok(cached) => Some(cached),
            Err(e) => {
                warn!("Ignoring unreadable catalog cache: {}", e);
                None
            }
        }
    }

    fn write_cache(
        &self,
        url: &str,
        entries: serde_json::Map<String, serde_json::Value>,
    ) -> Result<()> {
        let cached = CachedCatalog {
            fetched_at: Utc::now(),
            source_url: url.to_string(),
            entries,
        };

        let path = self.config.catalog_cache_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write atomically: write to temp then rename
        let content = serde_json::to_string_pretty(&cached)
            .map_err(crate::error::CacheError::Serialization)?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, &content)?;
        fs::rename(&tmp_path, &path)?;

        debug!("Cached catalog at {}", path.display());
        Ok(())
    }

    fn is_stale(&self, cached: &CachedCatalog) -> bool {
        let age = Utc::now().signed_duration_since(cached.fetched_at);
        age.num_hours() >= self.config.refresh_hours as i64
    }
}
