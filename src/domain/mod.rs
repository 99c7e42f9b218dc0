//! Domain layer: identity types, chat messages, and the connection registry.
//!
//! This module contains the server-side domain model: the stable user
//! identity, the per-connection transport token, registry entries with
//! their message logs, and the registry itself.

pub mod chat_message;
pub mod connection_entry;
pub mod connection_id;
pub mod registry;
pub mod user_id;

pub use chat_message::ChatMessage;
pub use connection_entry::{ConnectionEntry, UserSnapshot};
pub use connection_id::ConnectionId;
pub use registry::ConnectionRegistry;
pub use user_id::UserId;
