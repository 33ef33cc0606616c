use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::{debug, error};

#[derive(Debug, ThisError)]
pub enum TriviaError {
    #[error("resource not found")]
    NotFound,

    #[error("unprocessable: {0}")]
    Unprocessable(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),
}

impl TriviaError {
    pub fn status(&self) -> StatusCode {
        match self {
            TriviaError::NotFound => StatusCode::NOT_FOUND,
            TriviaError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TriviaError::BadRequest(_) => StatusCode::BAD_REQUEST,
            TriviaError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            TriviaError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            TriviaError::NotFound => "resource not found",
            TriviaError::Unprocessable(_) => "unprocessable",
            TriviaError::BadRequest(_) => "bad request",
            TriviaError::MethodNotAllowed => "method not allowed",
            TriviaError::DatabaseError(_) => "internal server error",
        }
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        match &self {
            TriviaError::DatabaseError(e) => error!(error = %e, "database failure"),
            TriviaError::Unprocessable(reason) | TriviaError::BadRequest(reason) => {
                debug!(status = status.as_u16(), reason = %reason, "request rejected")
            }
            _ => {}
        }

        let body = ApiErrorResponse {
            success: false,
            error: status.as_u16(),
            message: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Error envelope shared by every failing endpoint.
#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}
