use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BartenderDto {
    pub id: i32,
    pub room_id: i32,
    pub name: String,
    pub personality: String,
    pub greeting: String,
    pub avatar: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MenuItemDto {
    pub id: i32,
    pub bartender_id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: i32,
}

/// A bartender's disposition toward a user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MoodDto {
    pub bartender_id: i32,
    pub user_id: i32,
    pub mood: i32,
    pub tier: MoodTier,
    pub memories: Vec<MemoryDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MemoryDto {
    pub id: i32,
    pub kind: String,
    pub content: String,
    pub importance: i32,
    #[schema(value_type = Object)]
    pub details: serde_json::Value,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BartenderResponseDto {
    pub bartender_id: i32,
    /// Room the bartender works in, where the reply is broadcast
    pub room_id: i32,
    pub bartender_name: String,
    pub user_id: i32,
    pub text: String,
    pub mood: i32,
    pub tier: MoodTier,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OrderResultDto {
    pub menu_item: MenuItemDto,
    pub gold_remaining: i32,
    pub response: BartenderResponseDto,
}

/// Coarse bucket of a 0-100 mood value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MoodTier {
    Grumpy,
    Neutral,
    Friendly,
}

impl MoodTier {
    pub const GRUMPY_MAX: i32 = 25;
    pub const FRIENDLY_MIN: i32 = 75;

    pub fn from_mood(mood: i32) -> Self {
        if mood <= Self::GRUMPY_MAX {
            Self::Grumpy
        } else if mood >= Self::FRIENDLY_MIN {
            Self::Friendly
        } else {
            Self::Neutral
        }
    }
}
