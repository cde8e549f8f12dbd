use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn room<'a>(&'a self) -> RoomFixtures<'a> {
        RoomFixtures { setup: self }
    }
}

pub struct RoomFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> RoomFixtures<'a> {
    pub async fn insert_room(
        &self,
        name: &str,
        capacity: i32,
    ) -> Result<entity::tavern_room::Model, TestError> {
        Ok(
            entity::prelude::TavernRoom::insert(entity::tavern_room::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(format!("{} description", name)),
                theme: ActiveValue::Set("tavern".to_string()),
                capacity: ActiveValue::Set(capacity),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a chat message from a user
    pub async fn insert_message(
        &self,
        room_id: i32,
        user_id: i32,
        content: &str,
    ) -> Result<entity::tavern_message::Model, TestError> {
        self.insert_message_at(room_id, user_id, content, Utc::now().naive_utc())
            .await
    }

    /// Insert a chat message from a user with an explicit timestamp
    pub async fn insert_message_at(
        &self,
        room_id: i32,
        user_id: i32,
        content: &str,
        created_at: NaiveDateTime,
    ) -> Result<entity::tavern_message::Model, TestError> {
        Ok(
            entity::prelude::TavernMessage::insert(entity::tavern_message::ActiveModel {
                room_id: ActiveValue::Set(room_id),
                user_id: ActiveValue::Set(Some(user_id)),
                bartender_id: ActiveValue::Set(None),
                content: ActiveValue::Set(content.to_string()),
                kind: ActiveValue::Set("chat".to_string()),
                created_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
