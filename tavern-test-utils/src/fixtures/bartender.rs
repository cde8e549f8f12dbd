use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn bartender<'a>(&'a self) -> BartenderFixtures<'a> {
        BartenderFixtures { setup: self }
    }
}

pub struct BartenderFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> BartenderFixtures<'a> {
    pub async fn insert_bartender(
        &self,
        room_id: i32,
        name: &str,
    ) -> Result<entity::tavern_bartender::Model, TestError> {
        Ok(
            entity::prelude::TavernBartender::insert(entity::tavern_bartender::ActiveModel {
                room_id: ActiveValue::Set(room_id),
                name: ActiveValue::Set(name.to_string()),
                personality: ActiveValue::Set("gruff but fair".to_string()),
                greeting: ActiveValue::Set("What'll it be?".to_string()),
                avatar: ActiveValue::Set("dwarf".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_menu_item(
        &self,
        bartender_id: i32,
        name: &str,
        price: i32,
    ) -> Result<entity::tavern_menu_item::Model, TestError> {
        Ok(
            entity::prelude::TavernMenuItem::insert(entity::tavern_menu_item::ActiveModel {
                bartender_id: ActiveValue::Set(bartender_id),
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(format!("A fine {}", name)),
                category: ActiveValue::Set("drink".to_string()),
                price: ActiveValue::Set(price),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mood(
        &self,
        bartender_id: i32,
        user_id: i32,
        mood: i32,
    ) -> Result<entity::tavern_bartender_mood::Model, TestError> {
        Ok(
            entity::prelude::TavernBartenderMood::insert(
                entity::tavern_bartender_mood::ActiveModel {
                    bartender_id: ActiveValue::Set(bartender_id),
                    user_id: ActiveValue::Set(user_id),
                    mood: ActiveValue::Set(mood),
                    updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                },
            )
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_memory(
        &self,
        bartender_id: i32,
        user_id: i32,
        importance: i32,
        created_at: NaiveDateTime,
    ) -> Result<entity::tavern_bartender_memory::Model, TestError> {
        Ok(entity::prelude::TavernBartenderMemory::insert(
            entity::tavern_bartender_memory::ActiveModel {
                bartender_id: ActiveValue::Set(bartender_id),
                user_id: ActiveValue::Set(user_id),
                kind: ActiveValue::Set("conversation".to_string()),
                content: ActiveValue::Set("Talked about the weather".to_string()),
                importance: ActiveValue::Set(importance),
                details: ActiveValue::Set(serde_json::json!({})),
                created_at: ActiveValue::Set(created_at),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
