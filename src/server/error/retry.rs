use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently (bad request, bug)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection acquisition errors - transient, should retry
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                // Connection errors - transient, should retry
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Query errors, type conversion errors, missing records: retrying won't help
                _ => ErrorRetryStrategy::Fail,
            },

            // Session store hiccup
            Self::SessionError(_) => ErrorRetryStrategy::Retry,

            Self::ConfigError(_)
            | Self::AuthError(_)
            | Self::TavernError(_)
            | Self::ActionError(_)
            | Self::ProtocolError(_)
            | Self::ParseError(_)
            | Self::InternalError(_)
            | Self::SchedulerError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
