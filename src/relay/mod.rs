//! Relay boundary: wire protocol, session map, and connection handling.
//!
//! The WebSocket endpoint at `/ws` is the bidirectional channel that
//! carries presence and chat events between browser clients and the
//! gateway.

pub mod connection;
pub mod events;
pub mod handler;
pub mod sessions;
