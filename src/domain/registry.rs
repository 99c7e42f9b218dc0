//! In-memory connection registry.
//!
//! [`ConnectionRegistry`] holds every user the relay has seen during the
//! current process lifetime, in insertion order. Entries are upserted on
//! login, flipped offline on disconnect, and never removed, so iteration
//! order is stable for the life of the process.

use tokio::sync::RwLock;

use super::connection_entry::{ConnectionEntry, UserSnapshot};
use super::{ChatMessage, ConnectionId, UserId};

/// Central store of all known users and their live relay state.
///
/// Constructed once at startup and shared via `Arc`; the insertion-ordered
/// `Vec` matches the registry's documented semantics, where "the active
/// admin" is the first admin found online under registry order.
///
/// # Concurrency
///
/// All access goes through a single async `RwLock`; every operation
/// completes its mutation within one lock acquisition, so each relay event
/// observes and leaves a consistent registry.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    entries: RwLock<Vec<ConnectionEntry>>,
}

impl ConnectionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or refreshes the entry for `user_id`.
    ///
    /// A first login creates an online entry with an empty message log;
    /// a re-login refreshes `connection_id`, `name`, and the role flag in
    /// place and sets `online = true`. Never fails and never duplicates.
    pub async fn upsert(
        &self,
        user_id: UserId,
        name: String,
        is_admin: bool,
        connection_id: ConnectionId,
    ) -> UserSnapshot {
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.iter_mut().find(|e| e.user_id == user_id) {
            entry.connection_id = connection_id;
            entry.online = true;
            entry.name = name;
            entry.is_admin = is_admin;
            return UserSnapshot::from(&*entry);
        }
        let entry = ConnectionEntry::new(user_id, name, is_admin, connection_id);
        let snapshot = UserSnapshot::from(&entry);
        entries.push(entry);
        snapshot
    }

    /// Returns a clone of the full entry (message log included) for
    /// `user_id`, if one exists.
    pub async fn find_by_user_id(&self, user_id: &UserId) -> Option<ConnectionEntry> {
        let entries = self.entries.read().await;
        entries.iter().find(|e| &e.user_id == user_id).cloned()
    }

    /// Returns the first entry in insertion order with `is_admin && online`.
    ///
    /// Offline admin entries are skipped. With several admins online this
    /// deliberately picks the earliest-registered one (single-admin
    /// routing simplification).
    pub async fn find_active_admin(&self) -> Option<UserSnapshot> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .find(|e| e.is_active_admin())
            .map(UserSnapshot::from)
    }

    /// Marks the entry holding `connection_id` offline, returning its
    /// updated snapshot. A stale or unknown connection id is a no-op.
    pub async fn mark_offline(&self, connection_id: ConnectionId) -> Option<UserSnapshot> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .iter_mut()
            .find(|e| e.connection_id == connection_id)?;
        entry.online = false;
        Some(UserSnapshot::from(&*entry))
    }

    /// Appends a message to the log of `user_id`.
    ///
    /// Returns `false` when no entry exists for that id (the message is
    /// not logged anywhere in that case).
    pub async fn append_message(&self, user_id: &UserId, message: ChatMessage) -> bool {
        let mut entries = self.entries.write().await;
        match entries.iter_mut().find(|e| &e.user_id == user_id) {
            Some(entry) => {
                entry.messages.push(message);
                true
            }
            None => false,
        }
    }

    /// Returns full clones of every entry, in insertion order. This is the
    /// `listUsers` payload delivered to a newly-logged-in admin.
    pub async fn snapshot_full(&self) -> Vec<ConnectionEntry> {
        self.entries.read().await.clone()
    }

    /// Returns log-free snapshots of every entry, in insertion order.
    pub async fn snapshot(&self) -> Vec<UserSnapshot> {
        let entries = self.entries.read().await;
        entries.iter().map(UserSnapshot::from).collect()
    }

    /// Returns the number of known users (online or not).
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns `true` if no user has ever logged in.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Returns the number of entries currently online.
    pub async fn online_count(&self) -> usize {
        let entries = self.entries.read().await;
        entries.iter().filter(|e| e.online).count()
    }
}
