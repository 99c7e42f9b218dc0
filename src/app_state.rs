//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::RelayConfig;
use crate::domain::ConnectionRegistry;
use crate::relay::sessions::SessionMap;
use crate::service::{MessageRouter, PresenceTracker};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The process-wide connection registry.
    pub registry: Arc<ConnectionRegistry>,
    /// Outbound queues of all live connections.
    pub sessions: Arc<SessionMap>,
    /// Presence tracking service.
    pub presence: PresenceTracker,
    /// Message routing service.
    pub router: MessageRouter,
    /// Capacity of each new connection's outbound queue.
    pub outbound_queue_capacity: usize,
}

impl AppState {
    /// Wires the services over a shared registry and session map.
    #[must_use]
    pub fn new(
        registry: Arc<ConnectionRegistry>,
        sessions: Arc<SessionMap>,
        config: &RelayConfig,
    ) -> Self {
        let presence = PresenceTracker::new(Arc::clone(&registry), Arc::clone(&sessions));
        let router = MessageRouter::new(
            Arc::clone(&registry),
            Arc::clone(&sessions),
            config.auto_reply_name.clone(),
            config.auto_reply_body.clone(),
        );
        Self {
            registry,
            sessions,
            presence,
            router,
            outbound_queue_capacity: config.outbound_queue_capacity,
        }
    }
}
