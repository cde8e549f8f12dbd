use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pixel_tavern::{
    model::inventory::{EquipmentSlot, InventoryItemDto},
    server::{
        controller::inventory::{equip_item, get_inventory, unequip_item},
        model::session::user::SessionUser,
    },
};

use super::*;
use crate::util::body_json;

/// Expect the user's inventory with item details
#[tokio::test]
async fn lists_inventory() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_user("rowan")
        .with_user("ilsa")
        .build()
        .await?;
    let cap = test.item().insert_item("Leather Cap", Some("head")).await?;
    let token = test.item().insert_item("Tavern Token", None).await?;
    test.item().insert_inventory_entry(1, cap.id, 1).await?;
    test.item().insert_inventory_entry(1, token.id, 3).await?;
    test.item().insert_inventory_entry(2, token.id, 1).await?;
    SessionUser::login(&test.session, 1).await.unwrap();

    let resp = get_inventory(State(test.to_app_state()), test.session.clone())
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let items: Vec<InventoryItemDto> = body_json(resp).await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].item.name, "Leather Cap");
    assert_eq!(items[1].quantity, 3);

    Ok(())
}

/// Expect equipping to move the previous item out of the slot
#[tokio::test]
async fn equip_replaces_item_in_slot() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_user("rowan")
        .build()
        .await?;
    let cap = test.item().insert_item("Leather Cap", Some("head")).await?;
    let hood = test.item().insert_item("Wool Hood", Some("head")).await?;
    let cap_entry = test.item().insert_inventory_entry(1, cap.id, 1).await?;
    let hood_entry = test.item().insert_inventory_entry(1, hood.id, 1).await?;
    SessionUser::login(&test.session, 1).await.unwrap();

    equip_item(
        State(test.to_app_state()),
        test.session.clone(),
        Path(cap_entry.id),
    )
    .await
    .unwrap();

    let resp = equip_item(
        State(test.to_app_state()),
        test.session.clone(),
        Path(hood_entry.id),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let items: Vec<InventoryItemDto> = body_json(resp).await;
    let cap = items.iter().find(|i| i.id == cap_entry.id).unwrap();
    let hood = items.iter().find(|i| i.id == hood_entry.id).unwrap();
    assert!(!cap.equipped);
    assert_eq!(cap.slot, None);
    assert!(hood.equipped);
    assert_eq!(hood.slot, Some(EquipmentSlot::Head));

    Ok(())
}

/// Expect 400 Bad Request for an item without a slot
#[tokio::test]
async fn equip_rejects_unequippable_item() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_user("rowan")
        .build()
        .await?;
    let token = test.item().insert_item("Tavern Token", None).await?;
    let entry = test.item().insert_inventory_entry(1, token.id, 1).await?;
    SessionUser::login(&test.session, 1).await.unwrap();

    let result = equip_item(
        State(test.to_app_state()),
        test.session.clone(),
        Path(entry.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 when equipping another user's entry
#[tokio::test]
async fn equip_rejects_foreign_entry() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_user("rowan")
        .with_user("ilsa")
        .build()
        .await?;
    let cap = test.item().insert_item("Leather Cap", Some("head")).await?;
    let entry = test.item().insert_inventory_entry(2, cap.id, 1).await?;
    SessionUser::login(&test.session, 1).await.unwrap();

    let result = equip_item(
        State(test.to_app_state()),
        test.session.clone(),
        Path(entry.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect unequipping to clear the slot
#[tokio::test]
async fn unequips_item() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tavern_tables()
        .with_user("rowan")
        .build()
        .await?;
    let cap = test.item().insert_item("Leather Cap", Some("head")).await?;
    let entry = test.item().insert_inventory_entry(1, cap.id, 1).await?;
    SessionUser::login(&test.session, 1).await.unwrap();

    equip_item(
        State(test.to_app_state()),
        test.session.clone(),
        Path(entry.id),
    )
    .await
    .unwrap();

    let resp = unequip_item(
        State(test.to_app_state()),
        test.session.clone(),
        Path(entry.id),
    )
    .await
    .unwrap()
    .into_response();

    let items: Vec<InventoryItemDto> = body_json(resp).await;
    assert!(!items[0].equipped);
    assert_eq!(items[0].slot, None);

    Ok(())
}
