use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Please enter a valid table name.")]
    EmptyTableName,

    #[error("Invalid table name: {0:?}")]
    InvalidTableName(String),

    #[error("Please enter at least one value.")]
    NoValues,

    #[error("Unknown navigation event: {0}")]
    UnknownEvent(String),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl AppError {
    /// Errors caused by what the user typed, as opposed to the database or the server.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::EmptyTableName
                | AppError::InvalidTableName(_)
                | AppError::NoValues
                | AppError::UnknownEvent(_)
        )
    }
}

impl From<figment::Error> for AppError {
    fn from(e: figment::Error) -> Self {
        AppError::Config(Box::new(e))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match &self {
            AppError::EmptyTableName | AppError::InvalidTableName(_) | AppError::NoValues => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "INVALID_INPUT".to_string(),
                    message: self.to_string(),
                },
            ),
            AppError::UnknownEvent(_) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "UNKNOWN_EVENT".to_string(),
                    message: self.to_string(),
                },
            ),
            // Driver text is shown verbatim, the same way the HTML pages do.
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "DATABASE_ERROR".to_string(),
                    message: self.to_string(),
                },
            ),
            AppError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                },
            ),
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
