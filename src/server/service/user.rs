//! User service layer.
//!
//! Joining the tavern is name based: logging in with an unknown username creates the user,
//! logging in with a known one updates their avatar.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        service::retry::RetryContext,
    },
};

/// Gold every new user starts with
pub const STARTING_GOLD: i32 = 100;

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 24;

pub(crate) fn user_dto(user: entity::tavern_user::Model) -> UserDto {
    UserDto {
        id: user.id,
        username: user.username,
        avatar: user.avatar,
        gold: user.gold,
        level: user.level,
    }
}

/// Checks a username is 3 to 24 ASCII letters, digits, `_` or `-`
pub fn validate_username(username: &str) -> Result<(), AuthError> {
    let len = username.chars().count();
    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) || !valid_chars {
        return Err(AuthError::InvalidUsername(username.to_string()));
    }

    Ok(())
}

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Logs a user in, creating the account on first use.
    ///
    /// # Arguments
    /// - `username` - Name to log in with, surrounding whitespace is ignored
    /// - `avatar` - Avatar key chosen by the user
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created or updated user
    /// - `Err(Error::AuthError)` - Username or avatar failed validation
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn login(&self, username: &str, avatar: &str) -> Result<UserDto, Error> {
        let username = username.trim().to_string();
        let avatar = avatar.trim().to_string();

        validate_username(&username)?;
        if avatar.is_empty() {
            return Err(AuthError::MissingAvatar.into());
        }

        let ctx = RetryContext::new();
        let db = self.db;

        ctx.execute_with_retry(&format!("login of user {:?}", username), || {
            let username = username.clone();
            let avatar = avatar.clone();

            Box::pin(async move {
                let user = UserRepository::new(db)
                    .upsert_login(&username, &avatar, STARTING_GOLD)
                    .await?;

                Ok(user_dto(user))
            })
        })
        .await
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db;

        ctx.execute_with_retry(&format!("get user ID {}", user_id), || {
            Box::pin(async move {
                let user_repo = UserRepository::new(db);

                Ok(user_repo.get_by_id(user_id).await?.map(user_dto))
            })
        })
        .await
    }

    /// Records that the user is still around
    pub async fn touch(&self, user_id: i32) -> Result<(), Error> {
        UserRepository::new(self.db).touch_last_seen(user_id).await?;

        Ok(())
    }
}
