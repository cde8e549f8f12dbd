use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, inventory::InventoryItemDto},
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::inventory::InventoryService,
    },
};

pub static INVENTORY_TAG: &str = "inventory";

/// Inventory of the logged in user
#[utoipa::path(
    get,
    path = "/api/user/inventory",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "Success when retrieving the inventory", body = Vec<InventoryItemDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let items = InventoryService::new(&state.db).list(user.id).await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Equip an inventory entry, unequipping whatever occupied its slot
#[utoipa::path(
    post,
    path = "/api/user/inventory/{inventory_id}/equip",
    tag = INVENTORY_TAG,
    params(("inventory_id" = i32, Path, description = "ID of the inventory entry")),
    responses(
        (status = 200, description = "Item equipped, returns the updated inventory", body = Vec<InventoryItemDto>),
        (status = 400, description = "Item cannot be equipped", body = ErrorDto),
        (status = 404, description = "User or inventory entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn equip_item(
    State(state): State<AppState>,
    session: Session,
    Path(inventory_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let items = InventoryService::new(&state.db)
        .equip(user.id, inventory_id)
        .await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Unequip an inventory entry
#[utoipa::path(
    post,
    path = "/api/user/inventory/{inventory_id}/unequip",
    tag = INVENTORY_TAG,
    params(("inventory_id" = i32, Path, description = "ID of the inventory entry")),
    responses(
        (status = 200, description = "Item unequipped, returns the updated inventory", body = Vec<InventoryItemDto>),
        (status = 404, description = "User or inventory entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unequip_item(
    State(state): State<AppState>,
    session: Session,
    Path(inventory_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let items = InventoryService::new(&state.db)
        .unequip(user.id, inventory_id)
        .await?;

    Ok((StatusCode::OK, Json(items)))
}
