use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::tavern_user::Model>, DbErr> {
        entity::prelude::TavernUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Creates the user, or updates avatar and last seen time when the username is taken
    ///
    /// Runs as a single insert so concurrent logins with the same new name both succeed.
    pub async fn upsert_login(
        &self,
        username: &str,
        avatar: &str,
        starting_gold: i32,
    ) -> Result<entity::tavern_user::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let user = entity::tavern_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            avatar: ActiveValue::Set(avatar.to_string()),
            gold: ActiveValue::Set(starting_gold),
            level: ActiveValue::Set(1),
            created_at: ActiveValue::Set(now),
            last_seen_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::TavernUser::insert(user)
            .on_conflict(
                OnConflict::column(entity::tavern_user::Column::Username)
                    .update_columns([
                        entity::tavern_user::Column::Avatar,
                        entity::tavern_user::Column::LastSeenAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Sets the user's gold, returns `None` if the user doesn't exist
    pub async fn update_gold(
        &self,
        user_id: i32,
        gold: i32,
    ) -> Result<Option<entity::tavern_user::Model>, DbErr> {
        let Some(user) = self.get_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.gold = ActiveValue::Set(gold);

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Sets the user's level, returns `None` if the user doesn't exist
    pub async fn update_level(
        &self,
        user_id: i32,
        level: i32,
    ) -> Result<Option<entity::tavern_user::Model>, DbErr> {
        let Some(user) = self.get_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.level = ActiveValue::Set(level);

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Bumps the last seen timestamp, returns the number of rows updated
    pub async fn touch_last_seen(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TavernUser::update_many()
            .col_expr(
                entity::tavern_user::Column::LastSeenAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::tavern_user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    mod update {
        use tavern_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect gold and level to be persisted
        #[tokio::test]
        async fn updates_gold_and_level() -> Result<(), TestError> {
            let test = TestBuilder::new().with_tavern_tables().build().await?;
            let user = test.user().insert_user("rowan").await?;

            let user_repo = UserRepository::new(&test.db);
            let updated = user_repo.update_gold(user.id, 42).await?.unwrap();
            assert_eq!(updated.gold, 42);

            let updated = user_repo.update_level(user.id, 7).await?.unwrap();
            assert_eq!(updated.level, 7);
            assert_eq!(updated.gold, 42);

            Ok(())
        }

        /// Expect Ok(None) when the user does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_tavern_tables().build().await?;

            let user_repo = UserRepository::new(&test.db);

            assert!(matches!(user_repo.update_gold(1, 10).await, Ok(None)));
            assert!(matches!(user_repo.update_level(1, 2).await, Ok(None)));
            assert_eq!(user_repo.touch_last_seen(1).await?, 0);

            Ok(())
        }
    }

    mod upsert_login {
        use tavern_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect a new user with the starting gold at level 1
        #[tokio::test]
        async fn creates_missing_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_tavern_tables().build().await?;

            let user_repo = UserRepository::new(&test.db);
            let user = user_repo.upsert_login("rowan", "elf", 100).await?;

            assert_eq!(user.username, "rowan");
            assert_eq!(user.avatar, "elf");
            assert_eq!(user.gold, 100);
            assert_eq!(user.level, 1);

            Ok(())
        }

        /// Expect an existing row to keep its ID and gold and take the new avatar
        #[tokio::test]
        async fn updates_existing_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_tavern_tables().build().await?;
            let user = test.user().insert_user_with_gold("rowan", 7).await?;

            let user_repo = UserRepository::new(&test.db);
            let updated = user_repo.upsert_login("rowan", "wizard", 100).await?;

            assert_eq!(updated.id, user.id);
            assert_eq!(updated.gold, 7);
            assert_eq!(updated.avatar, "wizard");
            assert!(updated.last_seen_at >= user.last_seen_at);

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.upsert_login("rowan", "elf", 100).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
