use pixel_tavern::{
    model::{room::MessageKind, ws::ServerMessage},
    server::ws::connection::{Connection, ConnectionState},
};
use serde_json::json;

use super::*;

/// Expect requests needing a user to fail before login without closing the connection
#[tokio::test]
async fn rejects_requests_before_login() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_room("The Common Room", 20)
        .build()
        .await?;
    let mut connection = Connection::new(test.to_app_state(), None);

    let replies = connection
        .handle_frame(r#"{"type":"join_room","payload":{"room_id":1}}"#)
        .await;
    assert_eq!(error_message(&replies), "Log in before sending join_room");

    let replies = connection.handle_frame("{ not json").await;
    assert!(error_message(&replies).starts_with("Malformed message"));

    let replies = connection.handle_frame(r#"{"type":"ping"}"#).await;
    assert_eq!(replies, vec![ServerMessage::Pong]);
    assert!(matches!(
        connection.state(),
        ConnectionState::Unauthenticated
    ));

    Ok(())
}

/// Expect a connection opened with a session user to start authenticated
#[tokio::test]
async fn session_user_starts_authenticated() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_room("The Common Room", 20)
        .build()
        .await?;
    let state: AppState = test.to_app_state();
    let (_, user) = logged_in(&state, "rowan").await;

    let mut connection = Connection::new(state, Some(user.clone()));
    assert_eq!(connection.user(), Some(&user));

    let _rx = joined(&mut connection, 1).await;
    assert_eq!(connection.room_id(), Some(1));

    Ok(())
}

/// Expect joining to announce the user and return room state
#[tokio::test]
async fn join_announces_user_to_room() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_room("The Common Room", 20)
        .build()
        .await?;
    test.bartender().insert_bartender(1, "Brom").await?;
    let state: AppState = test.to_app_state();

    let (mut rowan, _) = logged_in(&state, "rowan").await;
    let mut rowan_rx = joined(&mut rowan, 1).await;

    let (mut ilsa, ilsa_user) = logged_in(&state, "ilsa").await;
    let replies = ilsa
        .handle_frame(r#"{"type":"join_room","payload":{"room_id":1}}"#)
        .await;

    match replies.as_slice() {
        [ServerMessage::RoomJoined {
            room,
            users,
            bartenders,
            history,
        }] => {
            assert_eq!(room.online, 2);
            assert_eq!(users.len(), 2);
            assert_eq!(bartenders[0].name, "Brom");
            assert!(history.is_empty());
        }
        other => panic!("unexpected replies {:?}", other),
    }

    match rowan_rx.try_recv() {
        Ok(ServerMessage::UserJoined { room_id, user }) => {
            assert_eq!(room_id, 1);
            assert_eq!(user.id, ilsa_user.id);
        }
        other => panic!("unexpected broadcast {:?}", other),
    }

    Ok(())
}

/// Expect chat to be broadcast to everyone in the room, sender included
#[tokio::test]
async fn broadcasts_chat_and_emotes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_room("The Common Room", 20)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let (mut rowan, rowan_user) = logged_in(&state, "rowan").await;
    let mut rowan_rx = joined(&mut rowan, 1).await;
    let (mut ilsa, _) = logged_in(&state, "ilsa").await;
    let mut ilsa_rx = joined(&mut ilsa, 1).await;
    // Ilsa joining
    rowan_rx.try_recv().unwrap();

    let replies = rowan
        .handle_frame(&json!({ "type": "send_message", "payload": { "content": "  Hello!  " } }).to_string())
        .await;
    assert!(replies.is_empty());

    for rx in [&mut rowan_rx, &mut ilsa_rx] {
        match rx.try_recv() {
            Ok(ServerMessage::NewMessage(message)) => {
                assert_eq!(message.content, "Hello!");
                assert_eq!(message.author, "rowan");
                assert_eq!(message.user_id, Some(rowan_user.id));
                assert_eq!(message.kind, MessageKind::Chat);
            }
            other => panic!("unexpected broadcast {:?}", other),
        }
    }

    rowan
        .handle_frame(&json!({ "type": "send_emote", "payload": { "content": "waves" } }).to_string())
        .await;
    match ilsa_rx.try_recv() {
        Ok(ServerMessage::NewMessage(message)) => assert_eq!(message.kind, MessageKind::Emote),
        other => panic!("unexpected broadcast {:?}", other),
    }

    Ok(())
}

/// Expect chatting outside a room and empty messages to be rejected
#[tokio::test]
async fn rejects_invalid_chat() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_room("The Common Room", 20)
        .build()
        .await?;
    let state: AppState = test.to_app_state();
    let (mut rowan, _) = logged_in(&state, "rowan").await;

    let replies = rowan
        .handle_frame(r#"{"type":"send_message","payload":{"content":"hi"}}"#)
        .await;
    assert_eq!(
        error_message(&replies),
        "Join a room before sending send_message"
    );

    let _rx = joined(&mut rowan, 1).await;
    let replies = rowan
        .handle_frame(r#"{"type":"send_message","payload":{"content":"   "}}"#)
        .await;
    assert!(error_message(&replies).starts_with("Invalid message"));

    Ok(())
}

/// Expect a full room to turn away new users
#[tokio::test]
async fn rejects_join_when_room_full() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_room("The Snug", 1)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let (mut rowan, _) = logged_in(&state, "rowan").await;
    let _rx = joined(&mut rowan, 1).await;

    let (mut ilsa, _) = logged_in(&state, "ilsa").await;
    let replies = ilsa
        .handle_frame(r#"{"type":"join_room","payload":{"room_id":1}}"#)
        .await;

    assert_eq!(error_message(&replies), "Room 1 is full");
    assert_eq!(ilsa.room_id(), None);
    assert_eq!(state.hub.online_count(1).await, 1);

    Ok(())
}

/// Expect leaving and disconnecting to announce the departure
#[tokio::test]
async fn leave_and_disconnect_announce_departure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_room("The Common Room", 20)
        .with_room("The Cellar", 20)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let (mut rowan, _) = logged_in(&state, "rowan").await;
    let mut rowan_rx = joined(&mut rowan, 1).await;
    let (mut ilsa, ilsa_user) = logged_in(&state, "ilsa").await;
    let _ilsa_rx = joined(&mut ilsa, 1).await;
    rowan_rx.try_recv().unwrap();

    // Joining another room leaves the first one
    let _cellar_rx = joined(&mut ilsa, 2).await;
    match rowan_rx.try_recv() {
        Ok(ServerMessage::UserLeft { room_id, user_id }) => {
            assert_eq!(room_id, 1);
            assert_eq!(user_id, ilsa_user.id);
        }
        other => panic!("unexpected broadcast {:?}", other),
    }
    assert_eq!(state.hub.online_count(2).await, 1);

    let replies = ilsa.handle_frame(r#"{"type":"leave_room"}"#).await;
    assert_eq!(replies, vec![ServerMessage::RoomLeft { room_id: 2 }]);
    assert_eq!(state.hub.online_count(2).await, 0);

    rowan.close().await;
    assert_eq!(state.hub.online_count(1).await, 0);

    Ok(())
}

/// Expect joining a second room to leave the first and hand out the new room's receiver
#[tokio::test]
async fn joining_another_room_moves_connection() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_room("The Common Room", 20)
        .with_room("The Cellar", 20)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let (mut rowan, _) = logged_in(&state, "rowan").await;
    let mut rowan_rx = joined(&mut rowan, 1).await;
    let (mut ilsa, ilsa_user) = logged_in(&state, "ilsa").await;
    let _common_rx = joined(&mut ilsa, 1).await;
    rowan_rx.try_recv().unwrap();
    assert_eq!(state.hub.online_count(1).await, 2);

    let replies = ilsa
        .handle_frame(r#"{"type":"join_room","payload":{"room_id":2}}"#)
        .await;
    match replies.as_slice() {
        [ServerMessage::RoomJoined { room, users, .. }] => {
            assert_eq!(room.id, 2);
            assert_eq!(users.len(), 1);
        }
        other => panic!("unexpected join replies {:?}", other),
    }
    assert_eq!(ilsa.room_id(), Some(2));

    match rowan_rx.try_recv() {
        Ok(ServerMessage::UserLeft { room_id, user_id }) => {
            assert_eq!(room_id, 1);
            assert_eq!(user_id, ilsa_user.id);
        }
        other => panic!("unexpected broadcast {:?}", other),
    }
    assert_eq!(state.hub.online_count(1).await, 1);
    assert_eq!(state.hub.online_count(2).await, 1);

    let mut cellar_rx = match ilsa.take_subscription() {
        Some(Subscription::Join(rx)) => rx,
        _ => panic!("join did not subscribe to the new room"),
    };

    ilsa.handle_frame(r#"{"type":"send_message","payload":{"content":"Anyone down here?"}}"#)
        .await;
    match cellar_rx.try_recv() {
        Ok(ServerMessage::NewMessage(message)) => {
            assert_eq!(message.room_id, 2);
            assert_eq!(message.content, "Anyone down here?");
        }
        other => panic!("unexpected broadcast {:?}", other),
    }
    assert!(rowan_rx.try_recv().is_err());

    Ok(())
}
