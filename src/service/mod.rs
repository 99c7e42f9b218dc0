//! Service layer: presence tracking and message routing.

pub mod presence;
pub mod router;

pub use presence::{DisconnectOutcome, LoginOutcome, PresenceTracker, SelectOutcome};
pub use router::{MessageRouter, RouteOutcome};
