use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct BartenderMemoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BartenderMemoryRepository<'a, C> {
    /// Creates a new instance of [`BartenderMemoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        bartender_id: i32,
        user_id: i32,
        kind: &str,
        content: &str,
        importance: i32,
        details: serde_json::Value,
    ) -> Result<entity::tavern_bartender_memory::Model, DbErr> {
        let memory = entity::tavern_bartender_memory::ActiveModel {
            bartender_id: ActiveValue::Set(bartender_id),
            user_id: ActiveValue::Set(user_id),
            kind: ActiveValue::Set(kind.to_string()),
            content: ActiveValue::Set(content.to_string()),
            importance: ActiveValue::Set(importance),
            details: ActiveValue::Set(details),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        memory.insert(self.db).await
    }

    /// Newest memories a bartender holds about a user
    pub async fn get_recent(
        &self,
        bartender_id: i32,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::tavern_bartender_memory::Model>, DbErr> {
        entity::prelude::TavernBartenderMemory::find()
            .filter(entity::tavern_bartender_memory::Column::BartenderId.eq(bartender_id))
            .filter(entity::tavern_bartender_memory::Column::UserId.eq(user_id))
            .order_by_desc(entity::tavern_bartender_memory::Column::CreatedAt)
            .order_by_desc(entity::tavern_bartender_memory::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Forgets memories at or below `max_importance` created before `before`
    pub async fn delete_stale(
        &self,
        max_importance: i32,
        before: NaiveDateTime,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::TavernBartenderMemory::delete_many()
            .filter(entity::tavern_bartender_memory::Column::Importance.lte(max_importance))
            .filter(entity::tavern_bartender_memory::Column::CreatedAt.lt(before))
            .exec(self.db)
            .await
    }
}
