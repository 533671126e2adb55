// API routes and handlers

pub mod health;
pub mod members;
pub mod routes;
pub mod workouts;

use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

use crate::errors::ApiError;
use crate::models::FromInput;
use crate::services::GymStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GymStore>,
}

/// Bind form of a path id. Values above `i64::MAX` cannot name any row.
pub(crate) fn row_id(raw: u64) -> Option<i64> {
    i64::try_from(raw).ok()
}

/// Run the validator for `T`, logging and converting a rejection.
pub(crate) fn validate_body<T: FromInput>(body: &Value) -> Result<T, ApiError> {
    T::from_input(body).map_err(|errors| {
        warn!(
            kind = ?T::KIND,
            fields = ?errors.fields().collect::<Vec<_>>(),
            "Validation Error"
        );
        ApiError::Validation(errors)
    })
}
