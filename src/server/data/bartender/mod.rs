//! Repositories for bartenders and the state they keep about users.

pub mod memory;
pub mod menu_item;
pub mod mood;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct BartenderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BartenderRepository<'a, C> {
    /// Creates a new instance of [`BartenderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        room_id: i32,
        name: &str,
        personality: &str,
        greeting: &str,
        avatar: &str,
    ) -> Result<entity::tavern_bartender::Model, DbErr> {
        let bartender = entity::tavern_bartender::ActiveModel {
            room_id: ActiveValue::Set(room_id),
            name: ActiveValue::Set(name.to_string()),
            personality: ActiveValue::Set(personality.to_string()),
            greeting: ActiveValue::Set(greeting.to_string()),
            avatar: ActiveValue::Set(avatar.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        bartender.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        bartender_id: i32,
    ) -> Result<Option<entity::tavern_bartender::Model>, DbErr> {
        entity::prelude::TavernBartender::find_by_id(bartender_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_room_id(
        &self,
        room_id: i32,
    ) -> Result<Vec<entity::tavern_bartender::Model>, DbErr> {
        entity::prelude::TavernBartender::find()
            .filter(entity::tavern_bartender::Column::RoomId.eq(room_id))
            .order_by_asc(entity::tavern_bartender::Column::Id)
            .all(self.db)
            .await
    }
}
