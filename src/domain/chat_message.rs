//! Chat message wire shape.

use serde::{Deserialize, Serialize};

use super::UserId;

/// One chat message as it travels over the relay, in either direction.
///
/// `user_id` always identifies the non-admin participant of the
/// conversation: for a user-sent message it is the sender's own id, for an
/// admin-sent message it is the target user's id. `is_admin` is the
/// sender's role as claimed by the client payload (trusted as-is, see the
/// crate-level security note).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Id of the conversation's non-admin participant.
    #[serde(rename = "_id")]
    pub user_id: UserId,

    /// Whether the sender claims the administrator role.
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,

    /// Message text.
    pub body: String,

    /// Display name of the sender, when the client supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChatMessage {
    /// Builds the canned reply sent back to a user when no administrator
    /// is online. It is never appended to any message log.
    #[must_use]
    pub fn auto_reply(user_id: UserId, name: &str, body: &str) -> Self {
        Self {
            user_id,
            is_admin: true,
            body: body.to_string(),
            name: Some(name.to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names_match_client_contract() {
        let msg = ChatMessage {
            user_id: UserId::from("u1"),
            is_admin: false,
            body: "hi".to_string(),
            name: Some("Uma".to_string()),
        };
        let json = serde_json::to_value(&msg).unwrap_or_default();
        assert_eq!(json["_id"], "u1");
        assert_eq!(json["isAdmin"], false);
        assert_eq!(json["body"], "hi");
        assert_eq!(json["name"], "Uma");
    }

    #[test]
    fn name_is_optional_on_the_wire() {
        let parsed: Result<ChatMessage, _> =
            serde_json::from_str(r#"{"_id":"u1","isAdmin":false,"body":"hi"}"#);
        let Ok(msg) = parsed else {
            panic!("message without name must parse");
        };
        assert_eq!(msg.name, None);
        let json = serde_json::to_value(&msg).unwrap_or_default();
        assert!(json.get("name").is_none());
    }

    #[test]
    fn auto_reply_carries_admin_persona() {
        let reply = ChatMessage::auto_reply(
            UserId::from("u1"),
            "Admin",
            "Sorry. I am not online right now",
        );
        assert!(reply.is_admin);
        assert_eq!(reply.name.as_deref(), Some("Admin"));
        assert_eq!(reply.body, "Sorry. I am not online right now");
    }
}
