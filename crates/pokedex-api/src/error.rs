//! API error taxonomy and its mapping to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;
use thiserror::Error;

/// Failure taxonomy shared by all handlers.
///
/// Every variant carries the human-readable message returned to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing from the request body.
    #[error("{0}")]
    BadRequest(String),
    /// Bad credentials, or an absent/invalid/expired bearer token.
    #[error("{0}")]
    Unauthorized(String),
    /// A user, record, or upstream entity does not exist.
    #[error("{0}")]
    NotFound(String),
    /// A unique key (email, pokemon name) already exists.
    #[error("{0}")]
    Conflict(String),
    /// Unclassified store or network failure.
    #[error("{0}")]
    Internal(String),
}

/// JSON body for every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// Log a database error and collapse it to [`ApiError::Internal`].
    #[must_use]
    pub fn db(e: &sqlx::Error) -> Self {
        error!("db: {e}");
        Self::Internal("Internal Server Error".to_owned())
    }

    /// HTTP status for this variant.
    ///
    /// Conflict maps to 400, matching the duplicate-email contract.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
