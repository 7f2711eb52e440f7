use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// Failure classification for the read path. The handler layer classifies,
/// `IntoResponse` maps a class to a status code; nothing is retried locally.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("database operation error")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    ConversionEntityError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            e @ (AppError::SpecificOperationError(_) | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        status_code.into_response()
    }
}
