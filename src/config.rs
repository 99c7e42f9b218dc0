//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), with sensible defaults.

use std::net::SocketAddr;

/// Top-level relay configuration.
///
/// Loaded once at startup via [`RelayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:5003`).
    pub listen_addr: SocketAddr,

    /// Capacity of each connection's outbound event queue. A full queue
    /// drops further pushes rather than blocking the services.
    pub outbound_queue_capacity: usize,

    /// Display name carried by the no-admin auto-reply.
    pub auto_reply_name: String,

    /// Text of the no-admin auto-reply.
    pub auto_reply_body: String,
}

/// Default bind address; the port the storefront frontend expects.
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5003";
const DEFAULT_QUEUE_CAPACITY: usize = 64;
const DEFAULT_REPLY_NAME: &str = "Admin";
const DEFAULT_REPLY_BODY: &str = "Sorry. I am not online right now";

impl RelayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set. Calls
    /// `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
            .parse()?;

        let outbound_queue_capacity = parse_env("OUTBOUND_QUEUE_CAPACITY", DEFAULT_QUEUE_CAPACITY);

        let auto_reply_name =
            std::env::var("AUTO_REPLY_NAME").unwrap_or_else(|_| DEFAULT_REPLY_NAME.to_string());
        let auto_reply_body =
            std::env::var("AUTO_REPLY_BODY").unwrap_or_else(|_| DEFAULT_REPLY_BODY.to_string());

        Ok(Self {
            listen_addr,
            outbound_queue_capacity,
            auto_reply_name,
            auto_reply_body,
        })
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.parse().unwrap_or_else(|_| {
                // The literal above always parses.
                SocketAddr::from(([0, 0, 0, 0], 5003))
            }),
            outbound_queue_capacity: DEFAULT_QUEUE_CAPACITY,
            auto_reply_name: DEFAULT_REPLY_NAME.to_string(),
            auto_reply_body: DEFAULT_REPLY_BODY.to_string(),
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
