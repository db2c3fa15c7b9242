use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use playshelf_enrich::{Enricher, GeneratedMetadata};
use playshelf_server::config::{ServerConfig, StorageConfig};
use playshelf_server::router;
use playshelf_server::state::AppState;
use playshelf_server::store::SNAPSHOT_FILE;

pub struct TestServer {
    pub addr: SocketAddr,
    pub data_dir: PathBuf,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a test server with a fresh data dir and enrichment disabled.
    pub async fn new() -> Self {
        Self::with_enricher(Enricher::Disabled).await
    }

    /// Start a test server whose enricher returns a fixed result.
    pub async fn with_fixed_enrichment(meta: Option<GeneratedMetadata>) -> Self {
        Self::with_enricher(Enricher::Fixed(meta)).await
    }

    pub async fn with_enricher(enricher: Enricher) -> Self {
        Self::start(fresh_data_dir(), enricher).await
    }

    /// Start a server over an existing data dir (used to test reloads).
    pub async fn over_data_dir(data_dir: PathBuf) -> Self {
        Self::start(data_dir, Enricher::Disabled).await
    }

    async fn start(data_dir: PathBuf, enricher: Enricher) -> Self {
        let config = ServerConfig {
            storage: StorageConfig {
                data_dir: data_dir.display().to_string(),
            },
            ..ServerConfig::default()
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let state = AppState::with_enricher(config, enricher).unwrap();
        let app = router(state);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            data_dir,
            _shutdown: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("http://{}/api/v1{path}", self.addr)
    }
}

/// A unique temp directory for one test's catalog snapshot.
pub fn fresh_data_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("playshelf-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn snapshot_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SNAPSHOT_FILE)
}

/// POST a game and return the created entry as JSON.
pub async fn post_game(
    client: &reqwest::Client,
    server: &TestServer,
    body: serde_json::Value,
) -> serde_json::Value {
    let resp = client
        .post(server.api_url("/games"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201, "add should succeed");
    resp.json().await.unwrap()
}

/// GET the game listing for a query string like "?search=astro".
pub async fn list_games(server: &TestServer, query: &str) -> serde_json::Value {
    reqwest::get(format!("{}{query}", server.api_url("/games")))
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}
