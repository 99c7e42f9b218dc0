//! Outbound session map.
//!
//! Maps each live [`ConnectionId`] to the sending half of that
//! connection's bounded outbound queue, so the presence tracker and
//! message router can push events to any connection without touching the
//! socket directly.

use std::collections::HashMap;

use tokio::sync::{RwLock, mpsc};

use super::events::OutboundEvent;
use crate::domain::ConnectionId;

/// Registry of live outbound queues, one per WebSocket connection.
///
/// Delivery through this map is fire-and-forget: pushing to a connection
/// that has already closed, or whose queue is full, drops the event
/// silently. That mirrors the relay's documented guarantee of no delivery
/// confirmation and no retry.
#[derive(Debug, Default)]
pub struct SessionMap {
    senders: RwLock<HashMap<ConnectionId, mpsc::Sender<OutboundEvent>>>,
}

impl SessionMap {
    /// Creates an empty session map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the outbound queue for a freshly upgraded connection.
    pub async fn register(&self, connection_id: ConnectionId, sender: mpsc::Sender<OutboundEvent>) {
        self.senders.write().await.insert(connection_id, sender);
    }

    /// Removes a connection's queue once its socket loop has exited.
    pub async fn unregister(&self, connection_id: ConnectionId) {
        self.senders.write().await.remove(&connection_id);
    }

    /// Pushes an event to one connection, fire-and-forget.
    ///
    /// Returns `true` when the event was queued; `false` when the
    /// connection is gone or its queue is full (the event is dropped).
    pub async fn send(&self, connection_id: ConnectionId, event: OutboundEvent) -> bool {
        let sender = {
            let senders = self.senders.read().await;
            senders.get(&connection_id).cloned()
        };
        match sender {
            Some(tx) => match tx.try_send(event) {
                Ok(()) => true,
                Err(err) => {
                    tracing::debug!(%connection_id, %err, "outbound event dropped");
                    false
                }
            },
            None => {
                tracing::debug!(%connection_id, "outbound event for unknown connection dropped");
                false
            }
        }
    }

    /// Returns the number of live connections.
    pub async fn len(&self) -> usize {
        self.senders.read().await.len()
    }

    /// Returns `true` when no connection is live.
    pub async fn is_empty(&self) -> bool {
        self.senders.read().await.is_empty()
    }
}
