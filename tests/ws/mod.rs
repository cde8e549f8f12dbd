//! Integration tests for WebSocket connections.
//!
//! Connections are driven frame by frame through [`Connection::handle_frame`], with room
//! broadcasts observed through the receivers each connection hands out on join.

mod bartender;
mod room;

use pixel_tavern::{
    model::{user::UserDto, ws::ServerMessage},
    server::{
        model::app::AppState,
        ws::connection::{Connection, Subscription},
    },
};
use serde_json::json;
use tavern_test_utils::prelude::*;
use tokio::sync::broadcast::Receiver;

/// Logs a fresh connection in over the socket
async fn logged_in(state: &AppState, username: &str) -> (Connection, UserDto) {
    let mut connection = Connection::new(state.clone(), None);

    let frame = json!({
        "type": "auth_login",
        "payload": { "username": username, "avatar": "bard" }
    });
    let replies = connection.handle_frame(&frame.to_string()).await;

    match replies.as_slice() {
        [ServerMessage::AuthSuccess(user)] => {
            let user = user.clone();
            (connection, user)
        }
        other => panic!("unexpected login replies {:?}", other),
    }
}

/// Joins a room and returns the room broadcast receiver
async fn joined(connection: &mut Connection, room_id: i32) -> Receiver<ServerMessage> {
    let frame = json!({ "type": "join_room", "payload": { "room_id": room_id } });
    let replies = connection.handle_frame(&frame.to_string()).await;

    assert!(
        matches!(replies.as_slice(), [ServerMessage::RoomJoined { .. }]),
        "unexpected join replies {:?}",
        replies
    );

    match connection.take_subscription() {
        Some(Subscription::Join(rx)) => rx,
        _ => panic!("join did not produce a subscription"),
    }
}

fn error_message(replies: &[ServerMessage]) -> &str {
    match replies {
        [ServerMessage::Error { message }] => message,
        other => panic!("expected a single error reply, got {:?}", other),
    }
}
