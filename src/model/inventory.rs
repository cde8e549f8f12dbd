use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub rarity: String,
    pub slot: Option<EquipmentSlot>,
    #[schema(value_type = Object)]
    pub stats: serde_json::Value,
    pub price: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InventoryItemDto {
    pub id: i32,
    pub item: ItemDto,
    pub quantity: i32,
    pub equipped: bool,
    pub slot: Option<EquipmentSlot>,
    pub acquired_at: NaiveDateTime,
}

/// Body location an equippable item occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum EquipmentSlot {
    Head,
    Chest,
    Legs,
    Feet,
    Hands,
    MainHand,
    OffHand,
    Accessory,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 8] = [
        Self::Head,
        Self::Chest,
        Self::Legs,
        Self::Feet,
        Self::Hands,
        Self::MainHand,
        Self::OffHand,
        Self::Accessory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Chest => "chest",
            Self::Legs => "legs",
            Self::Feet => "feet",
            Self::Hands => "hands",
            Self::MainHand => "mainHand",
            Self::OffHand => "offHand",
            Self::Accessory => "accessory",
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| format!("unknown equipment slot {:?}", s))
    }
}
