use pixel_tavern::model::{
    action::ActionResultDto,
    bartender::MoodTier,
    ws::ServerMessage,
};
use serde_json::json;

use super::*;

/// Expect an order to answer the buyer and broadcast the bartender's line
#[tokio::test]
async fn order_broadcasts_bartender_response() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_room("The Common Room", 20)
        .build()
        .await?;
    let bartender = test.bartender().insert_bartender(1, "Brom").await?;
    let stout = test
        .bartender()
        .insert_menu_item(bartender.id, "Dragon Stout", 12)
        .await?;
    let state: AppState = test.to_app_state();

    let (mut rowan, rowan_user) = logged_in(&state, "rowan").await;
    let mut rowan_rx = joined(&mut rowan, 1).await;

    let frame = json!({
        "type": "order_item",
        "payload": { "bartender_id": bartender.id, "menu_item_id": stout.id }
    });
    let replies = rowan.handle_frame(&frame.to_string()).await;

    match replies.as_slice() {
        [ServerMessage::OrderResult(result)] => {
            assert_eq!(result.gold_remaining, rowan_user.gold - 12);
            assert_eq!(result.menu_item.name, "Dragon Stout");
            assert_eq!(result.response.tier, MoodTier::Neutral);
        }
        other => panic!("unexpected replies {:?}", other),
    }

    match rowan_rx.try_recv() {
        Ok(ServerMessage::BartenderResponse(response)) => {
            assert_eq!(response.bartender_name, "Brom");
            assert_eq!(response.user_id, rowan_user.id);
        }
        other => panic!("unexpected broadcast {:?}", other),
    }

    Ok(())
}

/// Expect an order the user can't afford to fail without charging them
#[tokio::test]
async fn order_without_enough_gold() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_room("The Common Room", 20)
        .build()
        .await?;
    let bartender = test.bartender().insert_bartender(1, "Brom").await?;
    let elixir = test
        .bartender()
        .insert_menu_item(bartender.id, "Starlight Elixir", 500)
        .await?;
    let state: AppState = test.to_app_state();
    let (mut rowan, _) = logged_in(&state, "rowan").await;

    let frame = json!({
        "type": "order_item",
        "payload": { "bartender_id": bartender.id, "menu_item_id": elixir.id }
    });
    let replies = rowan.handle_frame(&frame.to_string()).await;

    assert_eq!(
        error_message(&replies),
        "Not enough gold: 500 required, 100 available"
    );

    Ok(())
}

/// Expect talking from outside the room to be answered directly
#[tokio::test]
async fn talk_from_outside_room_replies_directly() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_room("The Common Room", 20)
        .build()
        .await?;
    let bartender = test.bartender().insert_bartender(1, "Brom").await?;
    let state: AppState = test.to_app_state();
    let (mut rowan, _) = logged_in(&state, "rowan").await;

    let frame = json!({
        "type": "talk_to_bartender",
        "payload": { "bartender_id": bartender.id, "content": "Quiet night?" }
    });
    let replies = rowan.handle_frame(&frame.to_string()).await;

    match replies.as_slice() {
        [ServerMessage::BartenderResponse(response)] => {
            // First meeting is answered with the greeting
            assert_eq!(response.text, bartender.greeting);
        }
        other => panic!("unexpected replies {:?}", other),
    }

    Ok(())
}

/// Expect inventory and game actions to reply with the new state
#[tokio::test]
async fn inventory_and_actions_reply_directly() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tavern_tables().build().await?;
    let cap = test.item().insert_item("Leather Cap", Some("head")).await?;
    let state: AppState = test.to_app_state();
    let (mut rowan, rowan_user) = logged_in(&state, "rowan").await;

    let frame = json!({
        "type": "game_action",
        "payload": { "action": "add_inventory_item", "data": { "item_id": cap.id } }
    });
    let replies = rowan.handle_frame(&frame.to_string()).await;
    let entry_id = match replies.as_slice() {
        [ServerMessage::ActionResult(ActionResultDto::AddInventoryItem { entry, .. })] => {
            assert_eq!(entry.quantity, 1);
            entry.id
        }
        other => panic!("unexpected replies {:?}", other),
    };

    let frame = json!({ "type": "inventory_equip_item", "payload": { "inventory_id": entry_id } });
    let replies = rowan.handle_frame(&frame.to_string()).await;
    match replies.as_slice() {
        [ServerMessage::InventoryUpdate { items }] => assert!(items[0].equipped),
        other => panic!("unexpected replies {:?}", other),
    }

    let frame = json!({
        "type": "game_action",
        "payload": { "action": "update_level", "data": { "level": 101 } }
    });
    let replies = rowan.handle_frame(&frame.to_string()).await;
    assert_eq!(error_message(&replies), "Level 101 is out of range (1-100)");

    let frame = json!({
        "type": "game_action",
        "payload": { "action": "update_level", "data": { "level": 7 } }
    });
    let replies = rowan.handle_frame(&frame.to_string()).await;
    assert_eq!(
        replies,
        vec![ServerMessage::ActionResult(ActionResultDto::UpdateLevel {
            user_id: rowan_user.id,
            level: 7
        })]
    );

    Ok(())
}
