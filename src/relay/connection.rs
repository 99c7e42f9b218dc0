//! WebSocket connection state machine.
//!
//! Runs the read/write loop for a single relay connection, dispatching
//! inbound events to the presence tracker and message router and
//! forwarding queued outbound events to the client.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use super::events::{InboundEvent, OutboundEvent};
use crate::app_state::AppState;
use crate::domain::ConnectionId;
use crate::error::RelayError;

/// Runs the read/write loop for one relay connection.
///
/// - Registers the connection's outbound queue in the session map.
/// - Reads inbound frames and dispatches them run-to-completion.
/// - Forwards events pushed by the services to the client.
/// - On exit, unregisters the queue and fires the disconnect transition.
pub async fn run_connection(socket: WebSocket, state: AppState, connection_id: ConnectionId) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (tx, mut outbound_rx) = mpsc::channel(state.outbound_queue_capacity);
    state.sessions.register(connection_id, tx).await;
    tracing::debug!(%connection_id, "ws connection open");

    loop {
        tokio::select! {
            // Inbound frame from the client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(reply) = dispatch_frame(&text, &state, connection_id).await {
                            let json = serde_json::to_string(&reply).unwrap_or_default();
                            if ws_tx.send(Message::text(json)).await.is_err() {
                                break;
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
            // Outbound event queued by the presence tracker or router
            event = outbound_rx.recv() => {
                match event {
                    Some(event) => {
                        let json = serde_json::to_string(&event).unwrap_or_default();
                        if ws_tx.send(Message::text(json)).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }
        }
    }

    state.sessions.unregister(connection_id).await;
    let outcome = state.presence.on_disconnect(connection_id).await;
    tracing::debug!(%connection_id, ?outcome, "ws connection closed");
}

/// Dispatches one inbound frame, returning an error envelope to send back
/// when the frame could not be understood. Handled events reply through
/// the session map, never directly.
async fn dispatch_frame(
    text: &str,
    state: &AppState,
    connection_id: ConnectionId,
) -> Option<OutboundEvent> {
    match serde_json::from_str::<InboundEvent>(text) {
        Ok(InboundEvent::Login(payload)) => {
            let outcome = state.presence.on_login(payload, connection_id).await;
            tracing::debug!(%connection_id, ?outcome, "login handled");
            None
        }
        Ok(InboundEvent::UserSelected(payload)) => {
            let outcome = state.presence.on_user_selected(&payload.user_id).await;
            tracing::debug!(%connection_id, ?outcome, "selection handled");
            None
        }
        Ok(InboundEvent::Message(message)) => {
            let outcome = state.router.route(message, connection_id).await;
            tracing::debug!(%connection_id, ?outcome, "message routed");
            None
        }
        Err(err) => Some(classify_frame_error(text, &err).to_event()),
    }
}

/// Distinguishes an unknown event name from structurally bad input so the
/// client gets a precise error code.
fn classify_frame_error(text: &str, err: &serde_json::Error) -> RelayError {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => match value.get("event").and_then(|v| v.as_str()) {
            Some(name) if !matches!(name, "login" | "userSelected" | "message") => {
                RelayError::UnknownEvent(name.to_string())
            }
            _ => RelayError::MalformedEvent(err.to_string()),
        },
        Err(_) => RelayError::MalformedEvent("invalid JSON".to_string()),
    }
}
