use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use playshelf_enrich::Enricher;

use crate::config::ServerConfig;
use crate::store::CatalogStore;

pub type SharedCatalog = Arc<RwLock<CatalogStore>>;

#[derive(Clone)]
pub struct AppState {
    pub catalog: SharedCatalog,
    pub enricher: Arc<Enricher>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Open the catalog store and wire up the enrichment adapter.
    pub fn new(config: ServerConfig) -> std::io::Result<Self> {
        let enricher = Enricher::from_config(&config.enrichment);
        Self::with_enricher(config, enricher)
    }

    /// Build state around an explicit enricher (tests inject a double here).
    pub fn with_enricher(config: ServerConfig, enricher: Enricher) -> std::io::Result<Self> {
        let store = CatalogStore::open(Path::new(&config.storage.data_dir))?;
        Ok(Self {
            catalog: Arc::new(RwLock::new(store)),
            enricher: Arc::new(enricher),
            config: Arc::new(config),
        })
    }
}
