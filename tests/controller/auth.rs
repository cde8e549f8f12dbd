use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pixel_tavern::{
    model::user::{LoginDto, UserDto},
    server::{
        controller::auth::{get_user, login, logout},
        model::session::user::SessionUser,
    },
};

use super::*;
use crate::util::body_json;

fn credentials(username: &str) -> Json<LoginDto> {
    Json(LoginDto {
        username: username.to_string(),
        avatar: "bard".to_string(),
    })
}

/// Expect 200 with a new user stored in session
#[tokio::test]
async fn login_creates_user_and_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tavern_tables().build().await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        credentials("rowan"),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let user: UserDto = body_json(resp).await;
    assert_eq!(user.username, "rowan");
    assert_eq!(user.gold, 100);
    assert_eq!(user.level, 1);

    let session_user_id = SessionUser::user_id(&test.session).await.unwrap();
    assert_eq!(session_user_id, Some(user.id));

    Ok(())
}

/// Expect logging in twice with the same name to return the same user
#[tokio::test]
async fn login_reuses_existing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_user("rowan")
        .build()
        .await?;

    let resp = login(
        State(test.to_app_state()),
        test.session.clone(),
        credentials("rowan"),
    )
    .await
    .unwrap()
    .into_response();

    let user: UserDto = body_json(resp).await;
    assert_eq!(user.id, 1);

    Ok(())
}

/// Expect 400 Bad Request for a username with spaces
#[tokio::test]
async fn login_rejects_invalid_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tavern_tables().build().await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        credentials("sir rowan"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let session_user_id = SessionUser::user_id(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

/// Expect 204 and an empty session after logout
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUser::login(&test.session, 1).await.unwrap();

    let resp = logout(test.session.clone()).await.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let session_user_id = SessionUser::user_id(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

/// Expect 204 even when nobody was logged in
#[tokio::test]
async fn logout_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = logout(test.session).await.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect the logged in user to be returned
#[tokio::test]
async fn get_user_returns_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_user("rowan")
        .build()
        .await?;
    SessionUser::login(&test.session, 1).await.unwrap();

    let resp = get_user(State(test.to_app_state()), test.session.clone())
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let user: UserDto = body_json(resp).await;
    assert_eq!(user.username, "rowan");

    Ok(())
}

/// Expect 404 when nobody is logged in
#[tokio::test]
async fn get_user_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tavern_tables().build().await?;

    let result = get_user(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
