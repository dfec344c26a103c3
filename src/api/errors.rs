use serde::Deserialize;
use thiserror::Error;

/// Failure taxonomy for backend calls: transport failures, non-success HTTP
/// statuses, and malformed response bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Error envelope some backend endpoints return alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

impl ApiError {
    /// User-facing message rendered by widget error panels. Falls back to a
    /// generic string when the error body's shape is unrecognized.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "The platform could not be reached.".to_string(),
            ApiError::Status { status: 404, .. } => "The requested record was not found.".to_string(),
            ApiError::Status { status: 401 | 403, .. } => {
                "You are not allowed to view this data.".to_string()
            }
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            _ => "Something went wrong while loading this data.".to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
