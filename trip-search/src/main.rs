use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_search::catalog::LocationCatalog;
use trip_search::criteria::FormConfig;
use trip_search::web::{AppState, ServerConfig, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,trip_search=debug")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid server configuration");

    // Load the location catalog (fail fast if unreadable)
    let catalog = match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "loading location catalog");
            LocationCatalog::load(path).expect("Failed to load location catalog")
        }
        None => LocationCatalog::builtin().expect("Bundled location catalog is invalid"),
    };
    info!(locations = catalog.len(), "location catalog ready");

    let state = AppState::new(catalog, FormConfig::default());
    let app = create_router(state, &config.static_dir);

    let addr = config.bind_addr;
    info!("Trip search listening on http://{addr}");
    info!("  GET  /                      - Search form");
    info!("  GET  /search                - Results view");
    info!("  GET  /api/locations/search  - Location suggestions");
    info!("  POST /api/criteria/validate - Validate criteria");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
