//! Message router: user → admin and admin → user chat delivery.
//!
//! Routing is a pure function of the current registry state: admin-sent
//! messages go to the named online user, user-sent messages go to the
//! active admin, and a user messaging with no admin online gets the
//! canned auto-reply. Every call returns an explicit [`RouteOutcome`] so
//! tests and operators can observe what happened instead of inferring it
//! from the absence of side effects.

use std::sync::Arc;

use crate::domain::{ChatMessage, ConnectionId, ConnectionRegistry};
use crate::relay::events::OutboundEvent;
use crate::relay::sessions::SessionMap;

/// Observable result of routing one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Admin-sent message pushed to the target user and logged.
    DeliveredToUser,
    /// Admin-sent message whose target is absent or offline; dropped.
    DroppedNoRecipient,
    /// User-sent message pushed to the active admin and logged against
    /// the sender.
    DeliveredToAdmin,
    /// User-sent message with no admin online; the canned reply went
    /// straight back to the sending connection, nothing was logged.
    AutoReplied,
    /// User-sent message from an id that never logged in, while an admin
    /// was online to deliver to; rejected.
    RejectedUnknownSender,
}

/// Routes chat messages between users and the active admin.
///
/// Delivery is fire-and-forget: the push lands in the target
/// connection's outbound queue, which may already be gone. The outcome
/// reports what the router decided, not whether the client read it.
#[derive(Debug, Clone)]
pub struct MessageRouter {
    registry: Arc<ConnectionRegistry>,
    sessions: Arc<SessionMap>,
    reply_name: String,
    reply_body: String,
}

impl MessageRouter {
    /// Creates a new `MessageRouter` with the configured auto-reply
    /// persona and text.
    #[must_use]
    pub fn new(
        registry: Arc<ConnectionRegistry>,
        sessions: Arc<SessionMap>,
        reply_name: String,
        reply_body: String,
    ) -> Self {
        Self {
            registry,
            sessions,
            reply_name,
            reply_body,
        }
    }

    /// Routes one message arriving on `sender`.
    ///
    /// `message.is_admin` selects the direction; `message.user_id` names
    /// the conversation's non-admin participant in both directions.
    pub async fn route(&self, message: ChatMessage, sender: ConnectionId) -> RouteOutcome {
        if message.is_admin {
            self.route_to_user(message).await
        } else {
            self.route_to_admin(message, sender).await
        }
    }

    /// Admin → user direction.
    async fn route_to_user(&self, message: ChatMessage) -> RouteOutcome {
        match self.registry.find_by_user_id(&message.user_id).await {
            Some(target) if target.online => {
                self.sessions
                    .send(target.connection_id, OutboundEvent::Message(message.clone()))
                    .await;
                self.registry.append_message(&target.user_id, message).await;
                RouteOutcome::DeliveredToUser
            }
            _ => {
                tracing::warn!(user_id = %message.user_id, "admin message dropped, recipient not online");
                RouteOutcome::DroppedNoRecipient
            }
        }
    }

    /// User → admin direction.
    async fn route_to_admin(&self, message: ChatMessage, sender: ConnectionId) -> RouteOutcome {
        match self.registry.find_active_admin().await {
            Some(admin) => {
                // A message without a preceding login bypassed the presence
                // state machine; reject it rather than auto-register the
                // sender under the admin's feet.
                if self.registry.find_by_user_id(&message.user_id).await.is_none() {
                    tracing::warn!(user_id = %message.user_id, %sender, "message from unregistered sender rejected");
                    return RouteOutcome::RejectedUnknownSender;
                }
                self.sessions
                    .send(admin.connection_id, OutboundEvent::Message(message.clone()))
                    .await;
                let sender_id = message.user_id.clone();
                self.registry.append_message(&sender_id, message).await;
                RouteOutcome::DeliveredToAdmin
            }
            // The auto-reply goes straight back to the sending connection,
            // so it needs no registry entry and is unconditional.
            None => {
                let reply = ChatMessage::auto_reply(
                    message.user_id.clone(),
                    &self.reply_name,
                    &self.reply_body,
                );
                self.sessions
                    .send(sender, OutboundEvent::Message(reply))
                    .await;
                RouteOutcome::AutoReplied
            }
        }
    }
}
