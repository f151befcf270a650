//! Relay error taxonomy and its mapping onto HTTP responses.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use relaychat_ai::AiError;

use crate::protocol::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The body is not `{ messages: [...] }`.
    #[error("Invalid messages format")]
    InvalidMessages(#[source] serde_json::Error),

    /// The body could not be read, e.g. it exceeds the size limit.
    #[error("Invalid request body: {0}")]
    Body(BytesRejection),

    /// The upstream call failed or produced no usable text.
    #[error(transparent)]
    Upstream(#[from] AiError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidMessages(_) => StatusCode::BAD_REQUEST,
            RelayError::Body(rejection) => rejection.status(),
            RelayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
