//! chatline-gateway server entry point.
//!
//! Starts the Axum HTTP server with the relay WebSocket endpoint and the
//! REST observability surface.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use chatline_gateway::api;
use chatline_gateway::app_state::AppState;
use chatline_gateway::config::RelayConfig;
use chatline_gateway::domain::ConnectionRegistry;
use chatline_gateway::relay::handler::ws_handler;
use chatline_gateway::relay::sessions::SessionMap;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = RelayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting chatline-gateway");

    // Build domain layer
    let registry = Arc::new(ConnectionRegistry::new());
    let sessions = Arc::new(SessionMap::new());

    // Build application state
    let app_state = AppState::new(registry, sessions, &config);

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
