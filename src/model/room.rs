use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub theme: String,
    pub capacity: i32,
    /// Number of users currently connected to the room
    pub online: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub room_id: i32,
    pub user_id: Option<i32>,
    pub bartender_id: Option<i32>,
    /// Display name of whoever wrote the message
    pub author: String,
    pub kind: MessageKind,
    pub content: String,
    pub created_at: NaiveDateTime,
}

/// Kind of a chat message, stored as its string form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Chat,
    Emote,
    System,
    Bartender,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Emote => "emote",
            Self::System => "system",
            Self::Bartender => "bartender",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat" => Ok(Self::Chat),
            "emote" => Ok(Self::Emote),
            "system" => Ok(Self::System),
            "bartender" => Ok(Self::Bartender),
            other => Err(format!("unknown message kind {:?}", other)),
        }
    }
}
