//! Error types for ReadBookList

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::views;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                let page = views::Page::new("Page Not Found", None, &[]);
                (StatusCode::NOT_FOUND, views::errors::not_found(&page)).into_response()
            }
            AppError::Validation(msg) => {
                tracing::warn!("Unhandled validation error: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    views::errors::error_page(StatusCode::BAD_REQUEST, "Invalid input."),
                )
                    .into_response()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                internal_error()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        views::errors::error_page(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
    )
        .into_response()
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
