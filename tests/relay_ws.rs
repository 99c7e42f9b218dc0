//! End-to-end relay tests over live WebSocket connections.
//!
//! Boots the gateway on an ephemeral port and drives it with real
//! `tokio-tungstenite` clients, covering the login / presence / routing
//! scenarios the relay guarantees.

#![allow(clippy::panic, clippy::indexing_slicing)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use chatline_gateway::api;
use chatline_gateway::app_state::AppState;
use chatline_gateway::config::RelayConfig;
use chatline_gateway::domain::ConnectionRegistry;
use chatline_gateway::relay::handler::ws_handler;
use chatline_gateway::relay::sessions::SessionMap;

type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Boots the gateway on an ephemeral port, returning its `ws://` URL.
async fn spawn_gateway() -> String {
    let config = RelayConfig::default();
    let state = AppState::new(
        Arc::new(ConnectionRegistry::new()),
        Arc::new(SessionMap::new()),
        &config,
    );
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await;
    let Ok(listener) = listener else {
        panic!("failed to bind ephemeral port");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("failed to read local addr");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("ws://{addr}/ws")
}

async fn connect(url: &str) -> WsClient {
    let Ok((ws, _)) = connect_async(url).await else {
        panic!("failed to connect to {url}");
    };
    ws
}

async fn send_json(ws: &mut WsClient, frame: serde_json::Value) {
    let Ok(()) = ws.send(Message::text(frame.to_string())).await else {
        panic!("failed to send frame");
    };
}

/// Waits for the next text frame and parses it as a JSON envelope.
async fn recv_event(ws: &mut WsClient) -> serde_json::Value {
    let deadline = Duration::from_secs(5);
    loop {
        let next = tokio::time::timeout(deadline, ws.next()).await;
        let Ok(Some(Ok(msg))) = next else {
            panic!("no frame arrived within {deadline:?}");
        };
        if let Message::Text(text) = msg {
            let Ok(value) = serde_json::from_str(text.as_str()) else {
                panic!("server sent invalid JSON: {text}");
            };
            return value;
        }
    }
}

fn login_frame(id: &str, name: &str, is_admin: bool) -> serde_json::Value {
    serde_json::json!({
        "event": "login",
        "data": { "_id": id, "name": name, "isAdmin": is_admin }
    })
}

fn message_frame(id: &str, body: &str, is_admin: bool) -> serde_json::Value {
    serde_json::json!({
        "event": "message",
        "data": { "_id": id, "isAdmin": is_admin, "body": body }
    })
}

#[tokio::test]
async fn admin_sees_presence_and_chats_with_user() {
    let url = spawn_gateway().await;

    // Admin logs in and receives the full user list (itself).
    let mut admin = connect(&url).await;
    send_json(&mut admin, login_frame("a1", "Ada", true)).await;
    let listed = recv_event(&mut admin).await;
    assert_eq!(listed["event"], "listUsers");
    assert_eq!(listed["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(listed["data"][0]["_id"], "a1");
    assert_eq!(listed["data"][0]["online"], true);

    // A user logs in; the admin is told, the user hears nothing.
    let mut user = connect(&url).await;
    send_json(&mut user, login_frame("u1", "Uma", false)).await;
    let update = recv_event(&mut admin).await;
    assert_eq!(update["event"], "updateUser");
    assert_eq!(update["data"]["_id"], "u1");
    assert_eq!(update["data"]["online"], true);

    // User → admin message.
    send_json(&mut user, message_frame("u1", "hi", false)).await;
    let inbound = recv_event(&mut admin).await;
    assert_eq!(inbound["event"], "message");
    assert_eq!(inbound["data"]["body"], "hi");

    // Admin selects the conversation and gets the logged history.
    send_json(
        &mut admin,
        serde_json::json!({ "event": "userSelected", "data": { "_id": "u1" } }),
    )
    .await;
    let selected = recv_event(&mut admin).await;
    assert_eq!(selected["event"], "selectUser");
    assert_eq!(selected["data"]["_id"], "u1");
    assert_eq!(selected["data"]["messages"].as_array().map(Vec::len), Some(1));

    // Admin → user reply.
    send_json(&mut admin, message_frame("u1", "reply", true)).await;
    let reply = recv_event(&mut user).await;
    assert_eq!(reply["event"], "message");
    assert_eq!(reply["data"]["body"], "reply");

    // User disconnects; the admin sees the entry go offline.
    let _ = user.close(None).await;
    let offline = recv_event(&mut admin).await;
    assert_eq!(offline["event"], "updateUser");
    assert_eq!(offline["data"]["_id"], "u1");
    assert_eq!(offline["data"]["online"], false);
}

#[tokio::test]
async fn user_without_admin_gets_auto_reply() {
    let url = spawn_gateway().await;

    let mut user = connect(&url).await;
    send_json(&mut user, login_frame("u1", "Uma", false)).await;
    send_json(&mut user, message_frame("u1", "anyone there?", false)).await;

    let reply = recv_event(&mut user).await;
    assert_eq!(reply["event"], "message");
    assert_eq!(reply["data"]["name"], "Admin");
    assert_eq!(reply["data"]["body"], "Sorry. I am not online right now");

    // Even a client that never logged in gets the reply when no admin is
    // online; it answers the connection, not the registry entry.
    let mut stranger = connect(&url).await;
    send_json(&mut stranger, message_frame("s1", "hello?", false)).await;
    let reply = recv_event(&mut stranger).await;
    assert_eq!(reply["event"], "message");
    assert_eq!(reply["data"]["body"], "Sorry. I am not online right now");
}

#[tokio::test]
async fn malformed_frames_get_error_envelopes() {
    let url = spawn_gateway().await;
    let mut client = connect(&url).await;

    let Ok(()) = client.send(Message::text("not json")).await else {
        panic!("failed to send frame");
    };
    let error = recv_event(&mut client).await;
    assert_eq!(error["event"], "error");
    assert_eq!(error["data"]["code"], 1001);

    send_json(
        &mut client,
        serde_json::json!({ "event": "typing", "data": {} }),
    )
    .await;
    let error = recv_event(&mut client).await;
    assert_eq!(error["data"]["code"], 1002);

    // The connection survives protocol errors.
    send_json(&mut client, login_frame("u1", "Uma", false)).await;
    send_json(&mut client, message_frame("u1", "still here", false)).await;
    let reply = recv_event(&mut client).await;
    assert_eq!(reply["event"], "message");
}
