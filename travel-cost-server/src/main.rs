use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use travel_cost_server::config::AppConfig;
use travel_cost_server::travel::TravelCostService;
use travel_cost_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("travel_cost_server=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env().inspect_err(|e| {
        error!("Failed to load configuration: {e}");
    })?;
    info!(?config, "configuration loaded");

    // Create the distance-matrix client
    let service = TravelCostService::new(config.travel.clone())?;

    // Build app state and router
    let state = AppState::new(Arc::new(service));
    let app = create_router(state, &config.static_dir);

    let addr = config.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Travel Cost Calculator listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health               - Health check");
    info!("  POST /calculate            - Form calculation (HTML)");
    info!("  POST /api/calculate        - Calculation (JSON)");
    info!("  GET  /api/postcode/format  - Format a postcode");

    axum::serve(listener, app).await?;
    Ok(())
}
