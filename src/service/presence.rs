//! Presence tracker: login, disconnect, and conversation selection.
//!
//! Per-user state machine over `{unknown, online, offline}`: first login
//! creates an online entry, re-login refreshes the connection in place,
//! a disconnect matched by connection id flips the entry offline, and a
//! later login brings the same user back online under a new connection.

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, UserId};
use crate::relay::events::{LoginPayload, OutboundEvent};
use crate::relay::sessions::SessionMap;

/// What a login did beyond the registry upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Number of entries in the `listUsers` snapshot pushed to the joiner.
    /// `None` for non-admin joiners, who receive no list.
    pub listed_users: Option<usize>,
    /// Whether an active admin other than the joiner was sent an
    /// `updateUser` notification.
    pub admin_notified: bool,
}

/// What a disconnect did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisconnectOutcome {
    /// Entry marked offline and the active admin was notified.
    OfflineNotified,
    /// Entry marked offline; no admin online to notify.
    OfflineUnnoticed,
    /// No entry holds this connection id; nothing happened.
    UnknownConnection,
}

/// What a `userSelected` request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The selected entry was pushed to the active admin.
    Selected,
    /// No registry entry exists for the selected id; nothing was sent.
    UnknownUser,
    /// No admin is online to receive the selection.
    NoActiveAdmin,
}

/// Tracks who is online and keeps the active admin informed.
///
/// Stateless coordinator: owns references to the [`ConnectionRegistry`]
/// for state and the [`SessionMap`] for outbound delivery. Every
/// operation follows the pattern: mutate registry, query active admin,
/// push notification, return outcome.
#[derive(Debug, Clone)]
pub struct PresenceTracker {
    registry: Arc<ConnectionRegistry>,
    sessions: Arc<SessionMap>,
}

impl PresenceTracker {
    /// Creates a new `PresenceTracker`.
    #[must_use]
    pub fn new(registry: Arc<ConnectionRegistry>, sessions: Arc<SessionMap>) -> Self {
        Self { registry, sessions }
    }

    /// Handles an inbound `login` event.
    ///
    /// Upserts the registry entry, then: any admin joiner is pushed the
    /// full registry snapshot as `listUsers`, and an active admin other
    /// than the joiner is pushed the joiner's updated entry as
    /// `updateUser`. Both can happen for one login when a second admin
    /// joins while another is already active.
    pub async fn on_login(&self, payload: LoginPayload, connection_id: ConnectionId) -> LoginOutcome {
        let is_admin = payload.is_admin;
        let snapshot = self
            .registry
            .upsert(
                payload.user_id,
                payload.name,
                payload.is_admin,
                connection_id,
            )
            .await;
        tracing::info!(user_id = %snapshot.user_id, %connection_id, "user online");

        let listed_users = if is_admin {
            let users = self.registry.snapshot_full().await;
            let count = users.len();
            self.sessions
                .send(connection_id, OutboundEvent::ListUsers(users))
                .await;
            Some(count)
        } else {
            None
        };

        let admin_notified = match self.registry.find_active_admin().await {
            Some(admin) if admin.user_id != snapshot.user_id => {
                self.sessions
                    .send(admin.connection_id, OutboundEvent::UpdateUser(snapshot))
                    .await;
                true
            }
            _ => false,
        };

        LoginOutcome {
            listed_users,
            admin_notified,
        }
    }

    /// Handles a transport-level disconnect.
    ///
    /// Marks the matching entry offline and notifies the active admin, if
    /// any. An unknown connection id is a no-op.
    pub async fn on_disconnect(&self, connection_id: ConnectionId) -> DisconnectOutcome {
        let Some(snapshot) = self.registry.mark_offline(connection_id).await else {
            return DisconnectOutcome::UnknownConnection;
        };
        tracing::info!(user_id = %snapshot.user_id, %connection_id, "user offline");

        match self.registry.find_active_admin().await {
            Some(admin) => {
                self.sessions
                    .send(admin.connection_id, OutboundEvent::UpdateUser(snapshot))
                    .await;
                DisconnectOutcome::OfflineNotified
            }
            None => DisconnectOutcome::OfflineUnnoticed,
        }
    }

    /// Handles an inbound `userSelected` event.
    ///
    /// Read-only: re-emits the selected user's full entry (message log
    /// included) to the active admin as `selectUser`. A selection naming
    /// an unknown user sends nothing.
    pub async fn on_user_selected(&self, user_id: &UserId) -> SelectOutcome {
        let Some(admin) = self.registry.find_active_admin().await else {
            return SelectOutcome::NoActiveAdmin;
        };
        let Some(entry) = self.registry.find_by_user_id(user_id).await else {
            tracing::warn!(%user_id, "selection of unknown user ignored");
            return SelectOutcome::UnknownUser;
        };
        self.sessions
            .send(admin.connection_id, OutboundEvent::SelectUser(Box::new(entry)))
            .await;
        SelectOutcome::Selected
    }
}
