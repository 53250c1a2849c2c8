use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use charge_server::cache::{CacheConfig, CachedDirectory};
use charge_server::directory::{
    DirectoryClient, DirectoryClientConfig, DirectorySource, MockDirectoryClient,
};
use charge_server::recommend::{EngineConfig, Recommender};
use charge_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Station source: local mock data when STATION_DATA_DIR is set,
    // otherwise the real directory backend.
    let source = match std::env::var("STATION_DATA_DIR") {
        Ok(dir) => {
            info!(dir, "using mock station data");
            let mock = MockDirectoryClient::new(&dir).expect("Failed to load mock station data");
            DirectorySource::Mock(mock)
        }
        Err(_) => {
            let api_key = std::env::var("STATION_API_KEY").unwrap_or_else(|_| {
                warn!("STATION_API_KEY not set; directory requests will fail");
                String::new()
            });

            let mut config = DirectoryClientConfig::new(&api_key);
            if let Ok(url) = std::env::var("STATION_API_URL") {
                config = config.with_base_url(url);
            }

            let client = DirectoryClient::new(config).expect("Failed to create directory client");
            DirectorySource::Remote(client)
        }
    };

    let directory = CachedDirectory::new(source, &CacheConfig::default());
    let recommender = Recommender::new(EngineConfig::default());

    let state = AppState::new(directory, recommender);
    let app = create_router(state, "static");

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Charging station finder listening on http://{addr}");
    info!("API endpoints:");
    info!("  GET  /health               - Health check");
    info!("  GET  /api/stations         - Current station snapshot");
    info!("  POST /api/recommendations  - Rank stations for a request");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
