//! Registry entry combining account identity with live relay state.

use serde::Serialize;

use super::{ChatMessage, ConnectionId, UserId};

/// One known user's live relay state.
///
/// Created on first login, refreshed in place on every re-login and
/// appended to on every routed message. Never removed for the life of the
/// process; a disconnect only flips `online` to `false`.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionEntry {
    /// Stable account identity (immutable after creation).
    #[serde(rename = "_id")]
    pub user_id: UserId,

    /// Display name, refreshed from the login payload.
    pub name: String,

    /// Administrator role as claimed by the login payload. Accepted as-is
    /// from the client, not verified server-side.
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,

    /// `true` between login and disconnect.
    pub online: bool,

    /// Current transport connection; replaced on every new login.
    #[serde(rename = "connectionId")]
    pub connection_id: ConnectionId,

    /// Messages exchanged with this user during the current process
    /// lifetime. Append-only, not persisted.
    pub messages: Vec<ChatMessage>,
}

impl ConnectionEntry {
    /// Creates a fresh online entry with an empty message log.
    #[must_use]
    pub fn new(user_id: UserId, name: String, is_admin: bool, connection_id: ConnectionId) -> Self {
        Self {
            user_id,
            name,
            is_admin,
            online: true,
            connection_id,
            messages: Vec::new(),
        }
    }

    /// Returns `true` if this entry is an administrator currently online.
    #[must_use]
    pub fn is_active_admin(&self) -> bool {
        self.is_admin && self.online
    }
}

/// Lightweight projection of an entry without the message log.
///
/// This is the payload of `updateUser` presence notifications and of the
/// REST presence snapshot; the full [`ConnectionEntry`] (log included) is
/// what `selectUser` and `listUsers` carry.
#[derive(Debug, Clone, Serialize)]
pub struct UserSnapshot {
    /// Stable account identity.
    #[serde(rename = "_id")]
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Administrator role flag.
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    /// Whether the user is currently online.
    pub online: bool,
    /// Current transport connection.
    #[serde(rename = "connectionId")]
    pub connection_id: ConnectionId,
}

impl From<&ConnectionEntry> for UserSnapshot {
    fn from(entry: &ConnectionEntry) -> Self {
        Self {
            user_id: entry.user_id.clone(),
            name: entry.name.clone(),
            is_admin: entry.is_admin,
            online: entry.online,
            connection_id: entry.connection_id,
        }
    }
}
