use serde::{Deserialize, Serialize};

use crate::model::inventory::InventoryItemDto;

/// A named game action with its loosely typed payload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ActionRequestDto {
    /// One of `update_gold`, `update_level`, `add_inventory_item`, `remove_inventory_item`
    pub action: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionResultDto {
    UpdateGold { user_id: i32, gold: i32 },
    UpdateLevel { user_id: i32, level: i32 },
    AddInventoryItem { user_id: i32, entry: InventoryItemDto },
    RemoveInventoryItem { user_id: i32, item_id: i32, remaining: i32 },
}
