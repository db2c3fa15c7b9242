use tracing_subscriber::EnvFilter;

use playshelf_server::build_app;
use playshelf_server::config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::load();
    config.validate();

    let listen_addr = config.listen_addr.clone();
    let (app, state) = match build_app(config) {
        Ok(built) => built,
        Err(e) => {
            tracing::error!(error = %e, "Failed to open catalog store");
            std::process::exit(1);
        },
    };

    let games = state.catalog.read().await.games().len();

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {listen_addr}: {e}"));

    tracing::info!("Playshelf listening on {listen_addr} ({games} games in catalog)");

    axum::serve(listener, app).await.expect("Server error");
}
