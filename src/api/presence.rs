//! Presence observability endpoint.
//!
//! Read-only REST view over the connection registry so operators can see
//! what the relay knows without attaching a socket client.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Registry counters returned by the presence endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct PresenceStats {
    /// Users seen since process start (online or not).
    pub known_users: usize,
    /// Users currently online.
    pub online_users: usize,
    /// Live WebSocket connections (including ones that never logged in).
    pub live_connections: usize,
    /// Whether an administrator is currently online.
    pub admin_online: bool,
}

/// `GET /api/v1/presence` — Registry snapshot counters.
#[utoipa::path(
    get,
    path = "/api/v1/presence",
    tag = "Presence",
    summary = "Presence statistics",
    description = "Returns registry size, online count, live connection count, and whether an admin is active.",
    responses(
        (status = 200, description = "Current presence counters", body = PresenceStats),
    )
)]
pub async fn presence_handler(State(state): State<AppState>) -> impl IntoResponse {
    let stats = PresenceStats {
        known_users: state.registry.len().await,
        online_users: state.registry.online_count().await,
        live_connections: state.sessions.len().await,
        admin_online: state.registry.find_active_admin().await.is_some(),
    };
    (StatusCode::OK, Json(stats))
}

/// Presence routes, nested under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/presence", get(presence_handler))
}
