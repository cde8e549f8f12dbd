use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pixel_tavern::{
    model::action::{ActionRequestDto, ActionResultDto},
    server::{controller::action::dispatch_action, model::session::user::SessionUser},
};
use serde_json::json;

use super::*;
use crate::util::body_json;

fn request(action: &str, data: serde_json::Value) -> Json<ActionRequestDto> {
    Json(ActionRequestDto {
        action: action.to_string(),
        data,
    })
}

/// Expect gold to change by the requested amount
#[tokio::test]
async fn updates_gold() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_user("rowan")
        .build()
        .await?;
    SessionUser::login(&test.session, 1).await.unwrap();

    let resp = dispatch_action(
        State(test.to_app_state()),
        test.session.clone(),
        request("update_gold", json!({ "amount": 25 })),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result: ActionResultDto = body_json(resp).await;
    assert_eq!(
        result,
        ActionResultDto::UpdateGold {
            user_id: 1,
            gold: 125
        }
    );

    Ok(())
}

/// Expect 400 Bad Request for an unknown action
#[tokio::test]
async fn rejects_unknown_action() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_user("rowan")
        .build()
        .await?;
    SessionUser::login(&test.session, 1).await.unwrap();

    let result = dispatch_action(
        State(test.to_app_state()),
        test.session.clone(),
        request("summon_dragon", json!({})),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 Bad Request when the payload doesn't match the action
#[tokio::test]
async fn rejects_invalid_payload() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_user("rowan")
        .build()
        .await?;
    SessionUser::login(&test.session, 1).await.unwrap();

    let result = dispatch_action(
        State(test.to_app_state()),
        test.session.clone(),
        request("update_level", json!({ "level": "high" })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect added items to show up as an inventory entry
#[tokio::test]
async fn adds_inventory_item() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_user("rowan")
        .build()
        .await?;
    let cap = test.item().insert_item("Leather Cap", Some("head")).await?;
    SessionUser::login(&test.session, 1).await.unwrap();

    let resp = dispatch_action(
        State(test.to_app_state()),
        test.session.clone(),
        request("add_inventory_item", json!({ "item_id": cap.id, "quantity": 2 })),
    )
    .await
    .unwrap()
    .into_response();

    match body_json::<ActionResultDto>(resp).await {
        ActionResultDto::AddInventoryItem { user_id, entry } => {
            assert_eq!(user_id, 1);
            assert_eq!(entry.item.id, cap.id);
            assert_eq!(entry.quantity, 2);
            assert!(!entry.equipped);
        }
        other => panic!("unexpected result {:?}", other),
    }

    Ok(())
}

/// Expect 404 when nobody is logged in
#[tokio::test]
async fn requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tavern_tables().build().await?;

    let result = dispatch_action(
        State(test.to_app_state()),
        test.session.clone(),
        request("update_gold", json!({ "amount": 1 })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
