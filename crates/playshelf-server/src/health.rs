use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Structured health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub catalog: CatalogInfo,
}

#[derive(Serialize)]
pub struct CatalogInfo {
    pub games: usize,
    pub categories: usize,
}

/// Structured health check endpoint. Returns server status and catalog
/// counts as JSON.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.catalog.read().await;
    let games = store.games().len();
    // Minus the "All" sentinel.
    let categories = playshelf_core::query::categories(store.games()).len() - 1;

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        catalog: CatalogInfo { games, categories },
    })
}
