use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use pixel_tavern::{
    model::{
        bartender::{BartenderDto, MenuItemDto},
        room::{MessageDto, RoomDto},
        user::OnlineUserDto,
    },
    server::{
        controller::{
            bartender::get_menu,
            room::{get_room_bartenders, get_room_messages, get_rooms, HistoryParams},
        },
        model::app::AppState,
    },
};

use super::*;
use crate::util::body_json;

/// Expect rooms in creation order with their online counts
#[tokio::test]
async fn lists_rooms_with_online_counts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_room("The Common Room", 20)
        .with_room("The Cellar", 5)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let _rx = state
        .hub
        .join(
            1,
            20,
            OnlineUserDto {
                id: 1,
                username: "rowan".to_string(),
                avatar: "bard".to_string(),
            },
        )
        .await
        .unwrap();

    let resp = get_rooms(State(state)).await.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let rooms: Vec<RoomDto> = body_json(resp).await;
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].name, "The Common Room");
    assert_eq!(rooms[0].online, 1);
    assert_eq!(rooms[1].online, 0);

    Ok(())
}

/// Expect an empty list when no rooms exist
#[tokio::test]
async fn lists_no_rooms() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tavern_tables().build().await?;

    let resp = get_rooms(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    let rooms: Vec<RoomDto> = body_json(resp).await;
    assert!(rooms.is_empty());

    Ok(())
}

/// Expect the newest messages, oldest first
#[tokio::test]
async fn returns_recent_messages() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_room("The Common Room", 20)
        .with_user("rowan")
        .build()
        .await?;
    let now = Utc::now().naive_utc();
    for (i, content) in ["first", "second", "third"].iter().enumerate() {
        test.room()
            .insert_message_at(1, 1, content, now + Duration::seconds(i as i64))
            .await?;
    }

    let resp = get_room_messages(
        State(test.to_app_state()),
        Path(1),
        Query(HistoryParams { limit: Some(2) }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let messages: Vec<MessageDto> = body_json(resp).await;
    let contents: Vec<_> = messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["second", "third"]);
    assert!(messages.iter().all(|m| m.author == "rowan"));

    Ok(())
}

/// Expect 404 for history of a missing room
#[tokio::test]
async fn messages_of_missing_room() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tavern_tables().build().await?;

    let result = get_room_messages(
        State(test.to_app_state()),
        Path(42),
        Query(HistoryParams { limit: None }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a room's bartenders and their menus
#[tokio::test]
async fn returns_bartenders_and_menu() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_room("The Common Room", 20)
        .build()
        .await?;
    let bartender = test.bartender().insert_bartender(1, "Brom").await?;
    test.bartender()
        .insert_menu_item(bartender.id, "Dragon Stout", 12)
        .await?;
    test.bartender()
        .insert_menu_item(bartender.id, "Bog Water", 2)
        .await?;

    let resp = get_room_bartenders(State(test.to_app_state()), Path(1))
        .await
        .unwrap()
        .into_response();
    let bartenders: Vec<BartenderDto> = body_json(resp).await;
    assert_eq!(bartenders.len(), 1);
    assert_eq!(bartenders[0].name, "Brom");

    let resp = get_menu(State(test.to_app_state()), Path(bartender.id))
        .await
        .unwrap()
        .into_response();
    let menu: Vec<MenuItemDto> = body_json(resp).await;
    let names: Vec<_> = menu.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Bog Water", "Dragon Stout"]);

    Ok(())
}

/// Expect 404 for the menu of a missing bartender
#[tokio::test]
async fn menu_of_missing_bartender() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tavern_tables().build().await?;

    let result = get_menu(State(test.to_app_state()), Path(7)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
