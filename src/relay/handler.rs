//! Axum WebSocket upgrade handler.

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::IntoResponse;

use super::connection::run_connection;
use crate::app_state::AppState;
use crate::domain::ConnectionId;

/// `GET /ws` — Upgrade HTTP connection to the relay channel.
///
/// Mints a fresh [`ConnectionId`] per upgrade; the id changes on every
/// reconnect and is the disconnect correlation token.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let connection_id = ConnectionId::new();
    ws.on_upgrade(move |socket| run_connection(socket, state, connection_id))
}
