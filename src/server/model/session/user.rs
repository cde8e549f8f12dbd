use chrono::{NaiveDateTime, Utc};
use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_KEY: &str = "pixel_tavern:user";

/// The tavern user logged in through the cookie session
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SessionUser {
    pub user_id: i32,
    pub logged_in_at: NaiveDateTime,
}

impl SessionUser {
    /// Stores `user_id` as the session's user.
    ///
    /// The session ID is cycled unless the same user was already logged in.
    pub async fn login(session: &Session, user_id: i32) -> Result<Self, Error> {
        if Self::user_id(session).await? != Some(user_id) {
            session.cycle_id().await?;
        }

        let entry = SessionUser {
            user_id,
            logged_in_at: Utc::now().naive_utc(),
        };
        session.insert(SESSION_USER_KEY, entry.clone()).await?;

        Ok(entry)
    }

    pub async fn load(session: &Session) -> Result<Option<Self>, Error> {
        Ok(session.get::<SessionUser>(SESSION_USER_KEY).await?)
    }

    /// ID of the logged in user, if any
    pub async fn user_id(session: &Session) -> Result<Option<i32>, Error> {
        Ok(Self::load(session).await?.map(|entry| entry.user_id))
    }

    /// Clears the session, returns whether a user was logged in
    pub async fn logout(session: &Session) -> Result<bool, Error> {
        let Some(entry) = Self::load(session).await? else {
            return Ok(false);
        };

        session.clear().await;
        tracing::debug!(user_id = entry.user_id, "Cleared user session");

        Ok(true)
    }
}
