use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUser},
        service::user::UserService,
    },
};

/// Retrieves user information from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection & room hub
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserDto)`: User found
/// - `Err(Error::AuthError(UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(UserNotInDatabase))`: User ID exists in session but not found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUser::user_id(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

#[cfg(test)]
mod tests {
    use tavern_test_utils::prelude::*;

    use crate::server::{
        controller::util::get_user::get_user_from_session,
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUser},
    };

    /// Expect the user stored in session
    #[tokio::test]
    async fn returns_session_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tavern_tables()
            .with_user("rowan")
            .build()
            .await?;
        let state: AppState = test.to_app_state();
        SessionUser::login(&test.session, 1).await.unwrap();

        let user = get_user_from_session(&state, &test.session).await.unwrap();

        assert_eq!(user.username, "rowan");

        Ok(())
    }

    /// Expect UserNotInSession without a session user
    #[tokio::test]
    async fn fails_without_session_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tavern_tables().build().await?;
        let state: AppState = test.to_app_state();

        let result = get_user_from_session(&state, &test.session).await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::UserNotInSession))
        ));

        Ok(())
    }

    /// Expect UserNotInDatabase and a cleared session for a stale user ID
    #[tokio::test]
    async fn clears_session_for_missing_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tavern_tables().build().await?;
        let state: AppState = test.to_app_state();
        SessionUser::login(&test.session, 42).await.unwrap();

        let result = get_user_from_session(&state, &test.session).await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::UserNotInDatabase(42)))
        ));
        assert!(matches!(SessionUser::user_id(&test.session).await, Ok(None)));

        Ok(())
    }
}
