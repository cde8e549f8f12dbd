use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

/// Starting gold for fixture users
pub const DEFAULT_GOLD: i32 = 100;

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with [`DEFAULT_GOLD`] at level 1
    pub async fn insert_user(&self, username: &str) -> Result<entity::tavern_user::Model, TestError> {
        self.insert_user_with_gold(username, DEFAULT_GOLD).await
    }

    pub async fn insert_user_with_gold(
        &self,
        username: &str,
        gold: i32,
    ) -> Result<entity::tavern_user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::TavernUser::insert(entity::tavern_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                avatar: ActiveValue::Set("adventurer".to_string()),
                gold: ActiveValue::Set(gold),
                level: ActiveValue::Set(1),
                created_at: ActiveValue::Set(now),
                last_seen_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
