pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod state;
pub mod store;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use config::ServerConfig;
use state::AppState;

/// Build the Axum router and application state from a config.
///
/// Opening the catalog store is the only fallible step; snapshot corruption
/// is self-healed inside the store, so errors here are real IO failures.
pub fn build_app(config: ServerConfig) -> std::io::Result<(Router<()>, AppState)> {
    let state = AppState::new(config)?;
    Ok((router(state.clone()), state))
}

/// Build the router around existing state (tests inject their own).
pub fn router(state: AppState) -> Router<()> {
    let web_root = state.config.web_root.clone();

    let api_routes = Router::new()
        .route(
            "/games",
            axum::routing::get(api::list_games).post(api::add_game),
        )
        .route(
            "/games/{id}",
            axum::routing::get(api::get_game).delete(api::delete_game),
        )
        .route("/categories", axum::routing::get(api::list_categories));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", axum::routing::get(health::health_check))
        .layer(CorsLayer::permissive())
        .fallback_service(ServeDir::new(&web_root))
        .with_state(state)
}
