//! Relay wire protocol: inbound and outbound event envelopes.
//!
//! Every frame on the socket is a JSON envelope of the form
//! `{"event": <name>, "data": <payload>}`. The event names (`login`,
//! `userSelected`, `message`, `updateUser`, `listUsers`, `selectUser`)
//! are part of the client contract and must not change.

use serde::{Deserialize, Serialize};

use crate::domain::{ChatMessage, ConnectionEntry, UserId, UserSnapshot};

/// Login payload carried by the inbound `login` event.
///
/// `is_admin` is accepted exactly as the client supplies it; the relay
/// performs no server-side role verification.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    /// Stable account identity.
    #[serde(rename = "_id")]
    pub user_id: UserId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Client-claimed administrator role.
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

/// Payload of the inbound `userSelected` event (admin picks a chat).
#[derive(Debug, Clone, Deserialize)]
pub struct UserSelectedPayload {
    /// Id of the user whose conversation the admin opened.
    #[serde(rename = "_id")]
    pub user_id: UserId,
}

/// Client → server events.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum InboundEvent {
    /// A client announces its identity; drives the presence tracker.
    #[serde(rename = "login")]
    Login(LoginPayload),
    /// The admin selected a user's conversation; read-only.
    #[serde(rename = "userSelected")]
    UserSelected(UserSelectedPayload),
    /// A chat message to route.
    #[serde(rename = "message")]
    Message(ChatMessage),
}

/// Server → client events.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum OutboundEvent {
    /// Presence change notification, delivered to the active admin.
    #[serde(rename = "updateUser")]
    UpdateUser(UserSnapshot),
    /// Full registry snapshot, delivered to a newly-logged-in admin.
    #[serde(rename = "listUsers")]
    ListUsers(Vec<ConnectionEntry>),
    /// The selected user's full entry, delivered to the active admin.
    #[serde(rename = "selectUser")]
    SelectUser(Box<ConnectionEntry>),
    /// A routed chat message or the no-admin auto-reply.
    #[serde(rename = "message")]
    Message(ChatMessage),
    /// Protocol-level error reply; the connection stays open.
    #[serde(rename = "error")]
    Error(ErrorPayload),
}

/// Payload of the outbound `error` event.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    /// Numeric error code (see [`crate::error::RelayError::error_code`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}
