use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Violations of the tavern's game rules, all caused by the request rather than the server
#[derive(Error, Debug)]
pub enum TavernError {
    #[error("User {0} not found")]
    UserNotFound(i32),
    #[error("Room {0} not found")]
    RoomNotFound(i32),
    #[error("Room {0} is full")]
    RoomFull(i32),
    #[error("Bartender {0} not found")]
    BartenderNotFound(i32),
    #[error("Menu item {menu_item_id} is not served by bartender {bartender_id}")]
    MenuItemNotFound {
        bartender_id: i32,
        menu_item_id: i32,
    },
    #[error("Item {0} not found")]
    ItemNotFound(i32),
    #[error("Inventory entry {0} not found")]
    InventoryEntryNotFound(i32),
    #[error("Not enough gold: {required} required, {available} available")]
    InsufficientGold { required: i32, available: i32 },
    #[error("Not enough of item {item_id}: {requested} requested, {available} owned")]
    InsufficientQuantity {
        item_id: i32,
        requested: i32,
        available: i32,
    },
    #[error("Item {0} cannot be equipped")]
    ItemNotEquippable(i32),
    #[error("Invalid message: {0}")]
    InvalidMessage(String),
}

impl IntoResponse for TavernError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::UserNotFound(_)
            | Self::RoomNotFound(_)
            | Self::BartenderNotFound(_)
            | Self::MenuItemNotFound { .. }
            | Self::ItemNotFound(_)
            | Self::InventoryEntryNotFound(_) => StatusCode::NOT_FOUND,
            Self::RoomFull(_) => StatusCode::CONFLICT,
            Self::InsufficientGold { .. }
            | Self::InsufficientQuantity { .. }
            | Self::ItemNotEquippable(_)
            | Self::InvalidMessage(_) => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
