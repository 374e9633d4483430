//! Error type shared by the request path.
//!
//! Every variant maps to a status code and a `{"error": ...}` body. Anything
//! that is not a client or configuration problem is reported to the caller
//! as a generic server error and only logged in detail.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorBody;

pub type Result<T> = std::result::Result<T, AppError>;

pub const GENERIC_SERVER_ERROR: &str = "Server error.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Question is required.")]
    MissingQuestion,

    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,

    #[error("Request body too large.")]
    PayloadTooLarge,

    #[error("OpenAI API key not configured on server.")]
    MissingApiKey,

    /// Non-success response from the chat completion API, carrying its message.
    #[error("OpenAI error: {0}")]
    Upstream(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingQuestion => StatusCode::BAD_REQUEST,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::MissingApiKey
            | AppError::Upstream(_)
            | AppError::Http(_)
            | AppError::Serialization(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // message safe to hand back to the client
    pub fn public_message(&self) -> String {
        match self {
            AppError::Http(_) | AppError::Serialization(_) | AppError::Internal(_) => {
                GENERIC_SERVER_ERROR.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_facing_messages() {
        assert_eq!(AppError::MissingQuestion.public_message(), "Question is required.");
        assert_eq!(
            AppError::RateLimited.public_message(),
            "Too many requests. Please wait a moment and try again."
        );
        assert_eq!(
            AppError::MissingApiKey.public_message(),
            "OpenAI API key not configured on server."
        );
        assert_eq!(
            AppError::Upstream("Invalid model".to_string()).public_message(),
            "OpenAI error: Invalid model"
        );
    }

    #[test]
    fn internal_details_are_hidden() {
        let err = AppError::Internal("body stream reset".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), GENERIC_SERVER_ERROR);

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(AppError::from(parse).public_message(), GENERIC_SERVER_ERROR);
    }

    #[test]
    fn status_codes() {
        assert_eq!(AppError::MissingQuestion.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::RateLimited.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(AppError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(AppError::MissingApiKey.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::Upstream(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
