use std::path::{Path, PathBuf};

use playshelf_core::entry::GameEntry;
use playshelf_core::seed::seed_catalog;
use playshelf_core::time::now_millis;

/// Versioned snapshot file name. An incompatible future schema bumps the
/// version and abandons the old file.
pub const SNAPSHOT_FILE: &str = "games-gallery.v2.json";

/// Ordered catalog of game entries backed by a whole-file JSON snapshot.
///
/// Single-writer: the server serializes mutations behind a write lock.
/// Every mutation rewrites the full snapshot, no incremental diff.
pub struct CatalogStore {
    path: PathBuf,
    games: Vec<GameEntry>,
}

impl CatalogStore {
    /// Open the store under `data_dir`, loading the persisted snapshot.
    ///
    /// Missing or unparseable data is replaced by the seed catalog, which is
    /// persisted back immediately. Corruption is logged, never surfaced.
    pub fn open(data_dir: &Path) -> std::io::Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        let path = data_dir.join(SNAPSHOT_FILE);

        let loaded = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<GameEntry>>(&content) {
                Ok(games) => {
                    tracing::info!(count = games.len(), "Loaded catalog snapshot");
                    Some(games)
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Catalog snapshot unparseable, reseeding");
                    None
                },
            },
            Err(e) => {
                tracing::info!(reason = %e, "No readable catalog snapshot, seeding");
                None
            },
        };

        let mut store = Self {
            path,
            games: Vec::new(),
        };
        match loaded {
            Some(games) => store.games = games,
            None => {
                store.games = seed_catalog(now_millis());
                store.persist()?;
            },
        }
        Ok(store)
    }

    /// The full ordered catalog, most recent first.
    pub fn games(&self) -> &[GameEntry] {
        &self.games
    }

    /// Serialize the full ordered list and overwrite the snapshot.
    pub fn persist(&self) -> std::io::Result<()> {
        let json = serde_json::to_string(&self.games)?;
        std::fs::write(&self.path, json)
    }

    /// Prepend a new entry (new entries are most-recent by construction)
    /// and persist.
    pub fn add(&mut self, entry: GameEntry) -> std::io::Result<()> {
        self.games.insert(0, entry);
        self.persist()
    }

    /// Remove the entry with the given id and persist. An absent id is a
    /// no-op returning false, not an error.
    pub fn remove(&mut self, id: &str) -> std::io::Result<bool> {
        let before = self.games.len();
        self.games.retain(|g| g.id != id);
        if self.games.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    #[cfg(test)]
    fn get(&self, id: &str) -> Option<&GameEntry> {
        self.games.iter().find(|g| g.id == id)
    }
}
