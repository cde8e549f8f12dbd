use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not logged in")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Invalid username {0:?}: use 3 to 24 letters, digits, '_' or '-'")]
    InvalidUsername(String),
    #[error("Avatar must not be empty")]
    MissingAvatar,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "User not found")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                error_response(StatusCode::NOT_FOUND, "User not found")
            }
            err @ (Self::InvalidUsername(_) | Self::MissingAvatar) => {
                error_response(StatusCode::BAD_REQUEST, err.to_string())
            }
        }
    }
}
