use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::FieldErrors;

/// How a storage operation failed.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No connection could be acquired; nothing was executed.
    #[error("database connection failed: {0}")]
    Unavailable(#[source] sqlx::Error),
    /// A connection was acquired but the statement failed.
    #[error("statement execution failed: {0}")]
    Execution(#[source] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),
    #[error("not found")]
    NotFound,
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::NotFound
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            ApiError::Store(StoreError::Unavailable(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Database connection failed" })),
            )
                .into_response(),
            ApiError::Store(StoreError::Execution(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "Error": "Internal Server Error" })),
            )
                .into_response(),
            ApiError::MalformedBody(rejection) => (
                rejection.status(),
                Json(json!({ "error": "Request body must be a JSON document" })),
            )
                .into_response(),
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" }))).into_response()
            }
        }
    }
}
