//! Error types for the Pixel Tavern server.
//!
//! This module provides the error handling system for the server with specialized error types
//! for each domain (authentication, configuration, tavern rules, game actions, WebSocket
//! protocol). All errors implement `IntoResponse` for Axum HTTP responses and use `thiserror`
//! for ergonomic error definitions with automatic `Display` and `Error` trait implementations.

pub mod action;
pub mod auth;
pub mod config;
pub mod protocol;
pub mod retry;
pub mod tavern;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        action::ActionError, auth::AuthError, config::ConfigError, protocol::ProtocolError,
        tavern::TavernError,
    },
};

/// Main error type for the Pixel Tavern server.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers, while
/// [`Error::client_message`] provides the text sent back over WebSocket connections.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, user validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Tavern rule violation (missing room, not enough gold, unequippable item).
    #[error(transparent)]
    TavernError(#[from] TavernError),
    /// Game action dispatch error (unknown action, bad payload).
    #[error(transparent)]
    ActionError(#[from] ActionError),
    /// WebSocket protocol error (malformed frame, unauthenticated request).
    #[error(transparent)]
    ProtocolError(#[from] ProtocolError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

impl Error {
    /// Message safe to show to a connected client.
    ///
    /// Domain errors are described as-is; infrastructure errors are logged and reported as a
    /// generic internal error so implementation details don't leak over the socket.
    pub fn client_message(&self) -> String {
        match self {
            Self::AuthError(err) => err.to_string(),
            Self::TavernError(err) => err.to_string(),
            Self::ActionError(err) => err.to_string(),
            Self::ProtocolError(err) => err.to_string(),
            err => {
                tracing::error!("{}", err);

                "Internal server error".to_string()
            }
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Most errors are treated as internal server errors (500) with logging.
///
/// # Returns
/// - 400 Bad Request - Invalid input or a tavern rule violation
/// - 404 Not Found - Missing users, rooms, bartenders or items
/// - 409 Conflict - Room is full
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::TavernError(err) => err.into_response(),
            Self::ActionError(err) => err.into_response(),
            Self::ProtocolError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status code and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
