//! Room service layer.
//!
//! Rooms are fixed locations in the tavern; the service combines their stored data with the
//! live presence tracked by the [`RoomHub`] and owns the rules for chat messages.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::room::{MessageDto, MessageKind, RoomDto},
    server::{
        data::{
            bartender::BartenderRepository,
            message::{MessageAuthor, MessageRepository},
            room::RoomRepository,
            user::UserRepository,
        },
        error::{tavern::TavernError, Error},
        service::retry::RetryContext,
        ws::hub::RoomHub,
    },
};

pub const MAX_MESSAGE_LEN: usize = 500;
/// Messages sent to a client when joining a room
pub const DEFAULT_HISTORY_LIMIT: u64 = 50;
pub const MAX_HISTORY_LIMIT: u64 = 200;

/// Author name shown for messages posted by the tavern itself
pub const SYSTEM_AUTHOR: &str = "Tavern";

/// Trims message content and checks its length
pub fn validate_content(content: &str) -> Result<&str, TavernError> {
    let content = content.trim();

    if content.is_empty() {
        return Err(TavernError::InvalidMessage(
            "message must not be empty".to_string(),
        ));
    }
    if content.chars().count() > MAX_MESSAGE_LEN {
        return Err(TavernError::InvalidMessage(format!(
            "message must be at most {} characters",
            MAX_MESSAGE_LEN
        )));
    }

    Ok(content)
}

fn message_kind(message: &entity::tavern_message::Model) -> Result<MessageKind, Error> {
    message.kind.parse::<MessageKind>().map_err(|e| {
        Error::InternalError(format!(
            "Message ID {} has an invalid kind: {}",
            message.id, e
        ))
    })
}

fn message_dto(
    message: entity::tavern_message::Model,
    kind: MessageKind,
    author: String,
) -> MessageDto {
    MessageDto {
        id: message.id,
        room_id: message.room_id,
        user_id: message.user_id,
        bartender_id: message.bartender_id,
        author,
        kind,
        content: message.content,
        created_at: message.created_at,
    }
}

/// Service for rooms and their chat.
pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a RoomHub,
}

impl<'a> RoomService<'a> {
    /// Creates a new instance of RoomService.
    pub fn new(db: &'a DatabaseConnection, hub: &'a RoomHub) -> Self {
        Self { db, hub }
    }

    async fn room_dto(&self, room: entity::tavern_room::Model) -> RoomDto {
        let online = self.hub.online_count(room.id).await;

        RoomDto {
            id: room.id,
            name: room.name,
            description: room.description,
            theme: room.theme,
            capacity: room.capacity,
            online,
        }
    }

    /// Lists every room with the number of users currently inside.
    pub async fn list_rooms(&self) -> Result<Vec<RoomDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db;

        let rooms = ctx
            .execute_with_retry("list rooms", || {
                Box::pin(async move { Ok(RoomRepository::new(db).get_all().await?) })
            })
            .await?;

        let mut room_dtos = Vec::with_capacity(rooms.len());
        for room in rooms {
            room_dtos.push(self.room_dto(room).await);
        }

        Ok(room_dtos)
    }

    /// Retrieves a room.
    ///
    /// # Returns
    /// - `Ok(RoomDto)` - The room with its current online count
    /// - `Err(Error::TavernError(RoomNotFound))` - No room with that ID
    pub async fn get_room(&self, room_id: i32) -> Result<RoomDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db;

        let room = ctx
            .execute_with_retry(&format!("get room ID {}", room_id), || {
                Box::pin(async move { Ok(RoomRepository::new(db).get_by_id(room_id).await?) })
            })
            .await?
            .ok_or(TavernError::RoomNotFound(room_id))?;

        Ok(self.room_dto(room).await)
    }

    /// Returns the newest `limit` messages of a room in chronological order.
    ///
    /// `limit` is capped at [`MAX_HISTORY_LIMIT`].
    pub async fn history(&self, room_id: i32, limit: u64) -> Result<Vec<MessageDto>, Error> {
        let limit = limit.min(MAX_HISTORY_LIMIT);

        if RoomRepository::new(self.db)
            .get_by_id(room_id)
            .await?
            .is_none()
        {
            return Err(TavernError::RoomNotFound(room_id).into());
        }

        let recent = MessageRepository::new(self.db)
            .get_recent(room_id, limit)
            .await?;

        let bartender_names: HashMap<i32, String> = BartenderRepository::new(self.db)
            .get_by_room_id(room_id)
            .await?
            .into_iter()
            .map(|bartender| (bartender.id, bartender.name))
            .collect();

        let mut history = Vec::with_capacity(recent.len());
        for (message, user) in recent.into_iter().rev() {
            let kind = message_kind(&message)?;
            let author = match (user, message.bartender_id) {
                (Some(user), _) => user.username,
                (None, Some(bartender_id)) => bartender_names
                    .get(&bartender_id)
                    .cloned()
                    .unwrap_or_else(|| SYSTEM_AUTHOR.to_string()),
                (None, None) => SYSTEM_AUTHOR.to_string(),
            };

            history.push(message_dto(message, kind, author));
        }

        Ok(history)
    }

    /// Stores a chat message or emote posted by a user.
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - The stored message, ready to broadcast
    /// - `Err(Error::TavernError(InvalidMessage))` - Content empty after trimming, too long, or
    ///   `kind` isn't one users may post
    /// - `Err(Error::TavernError(UserNotFound))` - No user with that ID
    pub async fn post_message(
        &self,
        room_id: i32,
        user_id: i32,
        content: &str,
        kind: MessageKind,
    ) -> Result<MessageDto, Error> {
        if !matches!(kind, MessageKind::Chat | MessageKind::Emote) {
            return Err(TavernError::InvalidMessage(format!(
                "users cannot post {} messages",
                kind
            ))
            .into());
        }
        let content = validate_content(content)?;

        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(TavernError::UserNotFound(user_id))?;
        if RoomRepository::new(self.db)
            .get_by_id(room_id)
            .await?
            .is_none()
        {
            return Err(TavernError::RoomNotFound(room_id).into());
        }

        let message = MessageRepository::new(self.db)
            .create(room_id, MessageAuthor::User(user_id), kind, content)
            .await?;

        Ok(message_dto(message, kind, user.username))
    }
}
