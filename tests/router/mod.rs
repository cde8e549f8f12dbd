//! Requests driven through the full router, session layer included.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use pixel_tavern::{
    model::{room::RoomDto, user::UserDto},
    server::{model::app::AppState, router::routes, startup::session_layer},
};
use tavern_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::body_json;

fn app(test: &TestContext) -> Router {
    routes()
        .with_state(test.to_app_state::<AppState>())
        .layer(session_layer())
}

/// Expect the room list to be served as JSON
#[tokio::test]
async fn serves_room_list() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_room("The Common Room", 20)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(Request::get("/api/rooms").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let rooms: Vec<RoomDto> = body_json(resp).await;
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].online, 0);

    Ok(())
}

/// Expect login to set a session cookie
#[tokio::test]
async fn login_sets_session_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tavern_tables().build().await?;

    let request = Request::post("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"username":"rowan","avatar":"bard"}"#))
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(header::SET_COOKIE));

    let user: UserDto = body_json(resp).await;
    assert_eq!(user.username, "rowan");

    Ok(())
}

/// Expect 404 for the current user without a session cookie
#[tokio::test]
async fn current_user_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tavern_tables().build().await?;

    let resp = app(&test)
        .oneshot(Request::get("/api/auth/user").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a plain GET on the WebSocket endpoint to be refused without an upgrade
#[tokio::test]
async fn websocket_requires_upgrade() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tavern_tables().build().await?;

    let resp = app(&test)
        .oneshot(Request::get("/ws").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(resp.status().is_client_error());

    Ok(())
}
