//! Stable user identity.
//!
//! [`UserId`] is a newtype wrapper around the opaque account identifier
//! supplied by the storefront (a document-store id such as `"u1"`), kept
//! distinct from the per-connection transport token so the two can never
//! be confused.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, stable identifier of an account.
///
/// Unlike [`super::ConnectionId`], a `UserId` survives reconnects: it is
/// the dictionary key of the [`super::ConnectionRegistry`] and the routing
/// target for admin-sent messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a `UserId` from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
