use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Errors in frames received over a WebSocket connection
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Malformed message: {0}")]
    MalformedFrame(String),
    #[error("Unknown message type: {0}")]
    UnknownMessageType(String),
    #[error("Message type {0} can only be sent by the server")]
    ServerOnlyMessageType(String),
    #[error("Log in before sending {0}")]
    NotAuthenticated(String),
    #[error("Join a room before sending {0}")]
    NotInRoom(String),
}

impl IntoResponse for ProtocolError {
    fn into_response(self) -> Response {
        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
