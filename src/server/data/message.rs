use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::room::MessageKind;

/// Who posted a message
#[derive(Clone, Copy, Debug)]
pub enum MessageAuthor {
    User(i32),
    Bartender(i32),
    System,
}

pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    /// Creates a new instance of [`MessageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        room_id: i32,
        author: MessageAuthor,
        kind: MessageKind,
        content: &str,
    ) -> Result<entity::tavern_message::Model, DbErr> {
        let (user_id, bartender_id) = match author {
            MessageAuthor::User(id) => (Some(id), None),
            MessageAuthor::Bartender(id) => (None, Some(id)),
            MessageAuthor::System => (None, None),
        };

        let message = entity::tavern_message::ActiveModel {
            room_id: ActiveValue::Set(room_id),
            user_id: ActiveValue::Set(user_id),
            bartender_id: ActiveValue::Set(bartender_id),
            content: ActiveValue::Set(content.to_string()),
            kind: ActiveValue::Set(kind.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        message.insert(self.db).await
    }

    /// Latest `limit` messages of a room, newest first, with the posting user when there is one
    pub async fn get_recent(
        &self,
        room_id: i32,
        limit: u64,
    ) -> Result<
        Vec<(
            entity::tavern_message::Model,
            Option<entity::tavern_user::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::TavernMessage::find()
            .filter(entity::tavern_message::Column::RoomId.eq(room_id))
            .order_by_desc(entity::tavern_message::Column::CreatedAt)
            .order_by_desc(entity::tavern_message::Column::Id)
            .limit(limit)
            .find_also_related(entity::prelude::TavernUser)
            .all(self.db)
            .await
    }
}
