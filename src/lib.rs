//! # chatline-gateway
//!
//! WebSocket presence and chat relay gateway for a storefront support
//! channel. Connected browser clients announce themselves over `/ws`;
//! the gateway tracks who is online, keeps the active administrator's
//! user list current, and routes chat messages between users and that
//! admin — with a canned auto-reply when no admin is online.
//!
//! Presence is process-local and in-memory only: nothing survives a
//! restart, and the `isAdmin` role flag is accepted from the client
//! payload unverified (a known trust-boundary gap of the protocol this
//! gateway speaks, not a feature).
//!
//! ## Architecture
//!
//! ```text
//! Clients (WebSocket, HTTP)
//!     │
//!     ├── Relay endpoint (relay/): upgrade, per-connection loop,
//!     │   wire events, outbound session map
//!     ├── REST handlers (api/): health, presence counters
//!     │
//!     ├── PresenceTracker / MessageRouter (service/)
//!     │
//!     └── ConnectionRegistry (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod relay;
pub mod service;
