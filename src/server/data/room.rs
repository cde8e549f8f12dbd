use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    /// Creates a new instance of [`RoomRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        description: &str,
        theme: &str,
        capacity: i32,
    ) -> Result<entity::tavern_room::Model, DbErr> {
        let room = entity::tavern_room::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            theme: ActiveValue::Set(theme.to_string()),
            capacity: ActiveValue::Set(capacity),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        room.insert(self.db).await
    }

    pub async fn get_by_id(&self, room_id: i32) -> Result<Option<entity::tavern_room::Model>, DbErr> {
        entity::prelude::TavernRoom::find_by_id(room_id)
            .one(self.db)
            .await
    }

    /// All rooms in creation order
    pub async fn get_all(&self) -> Result<Vec<entity::tavern_room::Model>, DbErr> {
        entity::prelude::TavernRoom::find()
            .order_by_asc(entity::tavern_room::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::TavernRoom::find().count(self.db).await
    }
}
