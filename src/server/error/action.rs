use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),
    #[error("Invalid data for action {action}: {reason}")]
    InvalidPayload { action: String, reason: String },
    #[error("Level {0} is out of range (1-100)")]
    LevelOutOfRange(i32),
    #[error("Quantity {0} must be at least 1")]
    InvalidQuantity(i32),
}

impl IntoResponse for ActionError {
    fn into_response(self) -> Response {
        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
