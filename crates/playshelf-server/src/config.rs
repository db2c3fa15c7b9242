use serde::Deserialize;

use playshelf_enrich::EnrichConfig;

/// Top-level server configuration, loaded from `playshelf.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub web_root: String,
    pub storage: StorageConfig,
    pub enrichment: EnrichConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            web_root: "web".to_string(),
            storage: StorageConfig::default(),
            enrichment: EnrichConfig::default(),
        }
    }
}

/// Catalog persistence location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
        }
    }
}

impl ServerConfig {
    /// Validate configuration, logging warnings for issues.
    pub fn validate(&self) {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            tracing::error!(
                addr = %self.listen_addr,
                "listen_addr is not a valid socket address"
            );
            std::process::exit(1);
        }

        if self.storage.data_dir.is_empty() {
            tracing::error!("storage.data_dir must be non-empty");
            std::process::exit(1);
        }

        if self.enrichment.enabled {
            if self.enrichment.timeout_secs == 0 {
                tracing::error!("enrichment.timeout_secs must be > 0");
                std::process::exit(1);
            }
            if self.enrichment.model.is_empty() {
                tracing::error!("enrichment.model must be non-empty");
                std::process::exit(1);
            }
            if self.enrichment.api_key.is_empty() {
                tracing::warn!(
                    "Enrichment enabled but no API key configured; new entries will use fallback descriptions"
                );
            }
        }

        // Warn about secrets in config file (should use env vars in production)
        if !self.enrichment.api_key.is_empty() {
            tracing::warn!(
                "enrichment.api_key is set in config file — use PLAYSHELF_GEMINI_API_KEY env var in production"
            );
        }
    }

    /// Load config from `playshelf.toml` if it exists, then apply env var overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string("playshelf.toml") {
            Ok(content) => match toml::from_str::<ServerConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from playshelf.toml");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse playshelf.toml: {e}, using defaults");
                    ServerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No playshelf.toml found, using defaults");
                ServerConfig::default()
            },
        };

        // Environment variable overrides
        if let Ok(addr) = std::env::var("PLAYSHELF_LISTEN_ADDR")
            && !addr.is_empty()
        {
            config.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("PLAYSHELF_WEB_ROOT")
            && !root.is_empty()
        {
            config.web_root = root;
        }
        if let Ok(dir) = std::env::var("PLAYSHELF_DATA_DIR")
            && !dir.is_empty()
        {
            config.storage.data_dir = dir;
        }
        if let Ok(key) = std::env::var("PLAYSHELF_GEMINI_API_KEY")
            && !key.is_empty()
        {
            config.enrichment.api_key = key;
        }

        config
    }
}
