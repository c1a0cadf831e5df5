use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Placeholder icon used when a catalog entry has no preview image of its own.
pub const DEFAULT_SKILL_ICON: &str =
    "https://github.com/OpenVoiceOS/ovos-ocp-audio-plugin/raw/master/ovos_plugin_common_play/ocp/res/ui/images/ocp.png";

fn default_refresh_hours() -> u64 {
    24 * 7
}

fn default_playlist_size() -> usize {
    25
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data directory for the cached remote catalog
    pub data_dir: PathBuf,

    /// Identifier reported in every result record
    pub skill_id: String,

    /// Icon URL reported in every result record
    pub skill_icon: String,

    /// Local catalog JSON file (optional; embedded catalog is used otherwise)
    pub catalog_path: Option<PathBuf>,

    /// Remote catalog index URL (optional)
    pub catalog_url: Option<String>,

    /// Hours before a cached remote catalog is considered stale
    #[serde(default = "default_refresh_hours")]
    pub refresh_hours: u64,

    /// Maximum number of entries bundled into the featured playlist
    #[serde(default = "default_playlist_size")]
    pub playlist_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        let default_data_path = match ProjectDirs::from("net", "musicdock", "filmchest-cli") {
            Some(project_dirs) => project_dirs.data_dir().to_path_buf(),
            None => {
                // Graceful fallback to current directory if project dirs unavailable
                warn!("ProjectDirs unavailable; falling back to current directory for data path");
                PathBuf::from(".")
            }
        };

        Self {
            data_dir: default_data_path,
            skill_id: "filmchest-vintage-cartoons".to_string(),
            skill_icon: DEFAULT_SKILL_ICON.to_string(),
            catalog_path: None,
            catalog_url: None,
            refresh_hours: default_refresh_hours(),
            playlist_size: default_playlist_size(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Try to load .env file if it exists (for development)
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        let config_file = if let Some(path) = config_path {
            PathBuf::from(path)
        } else {
            Self::default_config_path()?
        };

        if config_file.exists() {
            let content = fs::read_to_string(&config_file)?;
            let file_config: Config = toml::from_str(&content)?;
            config = file_config;
        }

        // Environment variables have the highest priority
        config.load_from_env();
        config.validate()?;

        fs::create_dir_all(&config.data_dir)?;

        // Save config file if it doesn't exist
        if !config_file.exists() {
            if let Some(parent) = config_file.parent() {
                fs::create_dir_all(parent)?;
            }
            config.save(&config_file)?;
        }

        Ok(config)
    }

    /// Load configuration from environment variables
    fn load_from_env(&mut self) {
        if let Ok(data_dir) = env::var("FILMCHEST_DATA_DIR") {
            self.data_dir = PathBuf::from(data_dir);
        }

        if let Ok(skill_id) = env::var("FILMCHEST_SKILL_ID") {
            self.skill_id = skill_id;
        }

        if let Ok(icon) = env::var("FILMCHEST_SKILL_ICON") {
            self.skill_icon = icon;
        }

        if let Ok(path) = env::var("FILMCHEST_CATALOG_PATH") {
            self.catalog_path = Some(PathBuf::from(path));
        }

        if let Ok(url) = env::var("FILMCHEST_CATALOG_URL") {
            let trimmed = url.trim().to_string();
            if !trimmed.is_empty() {
                self.catalog_url = Some(trimmed);
            } else {
                self.catalog_url = None;
            }
        }

        if let Ok(hours) = env::var("FILMCHEST_REFRESH_HOURS") {
            if let Ok(value) = hours.parse::<u64>() {
                self.refresh_hours = value;
            }
        }

        if let Ok(size) = env::var("FILMCHEST_PLAYLIST_SIZE") {
            if let Ok(value) = size.parse::<usize>() {
                self.playlist_size = value;
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(ref url) = self.catalog_url {
            url::Url::parse(url)
                .map_err(|e| anyhow::anyhow!("Invalid catalog URL {:?}: {}", url, e))?;
        }
        url::Url::parse(&self.skill_icon)
            .map_err(|e| anyhow::anyhow!("Invalid skill icon URL {:?}: {}", self.skill_icon, e))?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn default_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("net", "musicdock", "filmchest-cli")
            .ok_or_else(|| anyhow::anyhow!("Failed to determine project directories"))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Self::default_config_path()
    }

    /// Path where the remote catalog copy is cached
    pub fn catalog_cache_path(&self) -> PathBuf {
        self.data_dir.join("catalog_cache.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_remote() {
        let config = Config::default();
        assert!(config.catalog_url.is_none());
        assert!(config.catalog_path.is_none());
        assert_eq!(config.refresh_hours, 24 * 7);
        assert_eq!(config.playlist_size, 25);
    }

    #[test]
    fn test_invalid_catalog_url_is_rejected() {
        let mut config = Config::default();
        config.catalog_url = Some("not-a-url".to_string());
        assert!(config.validate().is_err());

        config.catalog_url = Some("https://archive.org/catalog.json".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.skill_id, config.skill_id);
        assert_eq!(parsed.skill_icon, config.skill_icon);
    }
}
