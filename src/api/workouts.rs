use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};
use tracing::info;

use super::{row_id, validate_body, AppState};
use crate::errors::ApiError;
use crate::models::{WorkoutSession, WorkoutSessionData};

pub const WORKOUT_CREATED: &str = "Workout session scheduled successfully";
pub const WORKOUT_UPDATED: &str = "Workout session updated successfully";

pub fn workout_routes(state: AppState) -> Router {
    Router::new()
        .route("/workouts", get(list_workouts).post(create_workout))
        .route("/workouts/:id", put(update_workout))
        .route("/members/:id/workouts", get(list_member_workouts))
        .with_state(state)
}

/// List every workout session
#[tracing::instrument(skip(state))]
pub async fn list_workouts(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkoutSession>>, ApiError> {
    let sessions = state.store.list_workouts().await?;
    Ok(Json(sessions))
}

/// Schedule a new workout session
#[tracing::instrument(skip(state, body))]
pub async fn create_workout(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, ApiError>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let session: WorkoutSessionData = validate_body(&body)?;
    state.store.create_workout(session).await?;

    Ok((StatusCode::CREATED, Json(json!({ "message": WORKOUT_CREATED }))))
}

/// Replace a workout session's fields. An unknown id is not an error.
#[tracing::instrument(skip(state, body))]
pub async fn update_workout(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<u64>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, ApiError>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let session: WorkoutSessionData = validate_body(&body)?;
    let rows = match row_id(id) {
        Some(id) => state.store.update_workout(id, session).await?,
        None => 0,
    };
    info!(id, rows, "Workout session update applied");

    Ok((StatusCode::CREATED, Json(json!({ "message": WORKOUT_UPDATED }))))
}

/// List the workout sessions logged for one member
#[tracing::instrument(skip(state))]
pub async fn list_member_workouts(
    State(state): State<AppState>,
    WithRejection(Path(member_id), _): WithRejection<Path<u64>, ApiError>,
) -> Result<Json<Vec<WorkoutSession>>, ApiError> {
    let sessions = match row_id(member_id) {
        Some(member_id) => state.store.list_workouts_by_member(member_id).await?,
        None => Vec::new(),
    };
    Ok(Json(sessions))
}
