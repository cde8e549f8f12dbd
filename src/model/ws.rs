//! WebSocket protocol between the tavern client and server.
//!
//! Every frame is a JSON text frame shaped as `{ "type": "<message type>", "payload": { ... } }`.
//! Messages without data omit `payload`.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::model::{
    action::{ActionRequestDto, ActionResultDto},
    bartender::{BartenderDto, BartenderResponseDto, OrderResultDto},
    inventory::InventoryItemDto,
    room::{MessageDto, RoomDto},
    user::{OnlineUserDto, UserDto},
};

/// Messages sent by the client
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ClientMessage {
    AuthLogin { username: String, avatar: String },
    JoinRoom { room_id: i32 },
    LeaveRoom,
    SendMessage { content: String },
    SendEmote { content: String },
    OrderItem { bartender_id: i32, menu_item_id: i32 },
    TalkToBartender { bartender_id: i32, content: String },
    InventoryList,
    InventoryEquipItem { inventory_id: i32 },
    InventoryUnequipItem { inventory_id: i32 },
    GameAction(ActionRequestDto),
    Ping,
}

/// Messages sent by the server, either as a direct reply or broadcast to a room
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ServerMessage {
    AuthSuccess(UserDto),
    RoomJoined {
        room: RoomDto,
        users: Vec<OnlineUserDto>,
        bartenders: Vec<BartenderDto>,
        history: Vec<MessageDto>,
    },
    RoomLeft { room_id: i32 },
    UserJoined { room_id: i32, user: OnlineUserDto },
    UserLeft { room_id: i32, user_id: i32 },
    NewMessage(MessageDto),
    BartenderResponse(BartenderResponseDto),
    OrderResult(OrderResultDto),
    InventoryUpdate { items: Vec<InventoryItemDto> },
    ActionResult(ActionResultDto),
    Pong,
    Error { message: String },
}

/// Every message type string of the protocol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageType {
    AuthLogin,
    JoinRoom,
    LeaveRoom,
    SendMessage,
    SendEmote,
    OrderItem,
    TalkToBartender,
    InventoryList,
    InventoryEquipItem,
    InventoryUnequipItem,
    GameAction,
    Ping,
    AuthSuccess,
    RoomJoined,
    RoomLeft,
    UserJoined,
    UserLeft,
    NewMessage,
    BartenderResponse,
    OrderResult,
    InventoryUpdate,
    ActionResult,
    Pong,
    Error,
}

impl MessageType {
    pub const ALL: [MessageType; 24] = [
        Self::AuthLogin,
        Self::JoinRoom,
        Self::LeaveRoom,
        Self::SendMessage,
        Self::SendEmote,
        Self::OrderItem,
        Self::TalkToBartender,
        Self::InventoryList,
        Self::InventoryEquipItem,
        Self::InventoryUnequipItem,
        Self::GameAction,
        Self::Ping,
        Self::AuthSuccess,
        Self::RoomJoined,
        Self::RoomLeft,
        Self::UserJoined,
        Self::UserLeft,
        Self::NewMessage,
        Self::BartenderResponse,
        Self::OrderResult,
        Self::InventoryUpdate,
        Self::ActionResult,
        Self::Pong,
        Self::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthLogin => "auth_login",
            Self::JoinRoom => "join_room",
            Self::LeaveRoom => "leave_room",
            Self::SendMessage => "send_message",
            Self::SendEmote => "send_emote",
            Self::OrderItem => "order_item",
            Self::TalkToBartender => "talk_to_bartender",
            Self::InventoryList => "inventory_list",
            Self::InventoryEquipItem => "inventory_equip_item",
            Self::InventoryUnequipItem => "inventory_unequip_item",
            Self::GameAction => "game_action",
            Self::Ping => "ping",
            Self::AuthSuccess => "auth_success",
            Self::RoomJoined => "room_joined",
            Self::RoomLeft => "room_left",
            Self::UserJoined => "user_joined",
            Self::UserLeft => "user_left",
            Self::NewMessage => "new_message",
            Self::BartenderResponse => "bartender_response",
            Self::OrderResult => "order_result",
            Self::InventoryUpdate => "inventory_update",
            Self::ActionResult => "action_result",
            Self::Pong => "pong",
            Self::Error => "error",
        }
    }

    /// Whether clients are allowed to send this type
    pub fn is_client_message(&self) -> bool {
        matches!(
            self,
            Self::AuthLogin
                | Self::JoinRoom
                | Self::LeaveRoom
                | Self::SendMessage
                | Self::SendEmote
                | Self::OrderItem
                | Self::TalkToBartender
                | Self::InventoryList
                | Self::InventoryEquipItem
                | Self::InventoryUnequipItem
                | Self::GameAction
                | Self::Ping
        )
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

impl ClientMessage {
    pub fn message_type(&self) -> MessageType {
        match self {
            Self::AuthLogin { .. } => MessageType::AuthLogin,
            Self::JoinRoom { .. } => MessageType::JoinRoom,
            Self::LeaveRoom => MessageType::LeaveRoom,
            Self::SendMessage { .. } => MessageType::SendMessage,
            Self::SendEmote { .. } => MessageType::SendEmote,
            Self::OrderItem { .. } => MessageType::OrderItem,
            Self::TalkToBartender { .. } => MessageType::TalkToBartender,
            Self::InventoryList => MessageType::InventoryList,
            Self::InventoryEquipItem { .. } => MessageType::InventoryEquipItem,
            Self::InventoryUnequipItem { .. } => MessageType::InventoryUnequipItem,
            Self::GameAction(_) => MessageType::GameAction,
            Self::Ping => MessageType::Ping,
        }
    }
}

impl ServerMessage {
    pub fn message_type(&self) -> MessageType {
        match self {
            Self::AuthSuccess(_) => MessageType::AuthSuccess,
            Self::RoomJoined { .. } => MessageType::RoomJoined,
            Self::RoomLeft { .. } => MessageType::RoomLeft,
            Self::UserJoined { .. } => MessageType::UserJoined,
            Self::UserLeft { .. } => MessageType::UserLeft,
            Self::NewMessage(_) => MessageType::NewMessage,
            Self::BartenderResponse(_) => MessageType::BartenderResponse,
            Self::OrderResult(_) => MessageType::OrderResult,
            Self::InventoryUpdate { .. } => MessageType::InventoryUpdate,
            Self::ActionResult(_) => MessageType::ActionResult,
            Self::Pong => MessageType::Pong,
            Self::Error { .. } => MessageType::Error,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}
