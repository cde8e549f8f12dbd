use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct BartenderMoodRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BartenderMoodRepository<'a, C> {
    /// Creates a new instance of [`BartenderMoodRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(
        &self,
        bartender_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::tavern_bartender_mood::Model>, DbErr> {
        entity::prelude::TavernBartenderMood::find()
            .filter(entity::tavern_bartender_mood::Column::BartenderId.eq(bartender_id))
            .filter(entity::tavern_bartender_mood::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Sets the mood for a bartender & user pair, creating the row on first use
    pub async fn upsert(
        &self,
        bartender_id: i32,
        user_id: i32,
        mood: i32,
    ) -> Result<entity::tavern_bartender_mood::Model, DbErr> {
        let now = Utc::now().naive_utc();

        match self.get(bartender_id, user_id).await? {
            Some(existing) => {
                let mut mood_am = existing.into_active_model();
                mood_am.mood = ActiveValue::Set(mood);
                mood_am.updated_at = ActiveValue::Set(now);

                mood_am.update(self.db).await
            }
            None => {
                entity::tavern_bartender_mood::ActiveModel {
                    bartender_id: ActiveValue::Set(bartender_id),
                    user_id: ActiveValue::Set(user_id),
                    mood: ActiveValue::Set(mood),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::tavern_bartender_mood::Model>, DbErr> {
        entity::prelude::TavernBartenderMood::find().all(self.db).await
    }

    /// Overwrites the mood of an existing row without touching `updated_at`
    pub async fn set_mood(
        &self,
        mood: entity::tavern_bartender_mood::Model,
        value: i32,
    ) -> Result<entity::tavern_bartender_mood::Model, DbErr> {
        let mut mood_am = mood.into_active_model();
        mood_am.mood = ActiveValue::Set(value);

        mood_am.update(self.db).await
    }
}
