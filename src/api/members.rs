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
use crate::models::{Member, MemberData};

pub const MEMBER_CREATED: &str = "New Member added successfully";
pub const MEMBER_UPDATED: &str = "Member information updated";

pub fn member_routes(state: AppState) -> Router {
    Router::new()
        .route("/members", get(list_members).post(create_member))
        .route("/members/:id", put(update_member))
        .with_state(state)
}

/// List every member
#[tracing::instrument(skip(state))]
pub async fn list_members(State(state): State<AppState>) -> Result<Json<Vec<Member>>, ApiError> {
    let members = state.store.list_members().await?;
    Ok(Json(members))
}

/// Add a new member
#[tracing::instrument(skip(state, body))]
pub async fn create_member(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, ApiError>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let member: MemberData = validate_body(&body)?;
    state.store.create_member(member).await?;

    Ok((StatusCode::CREATED, Json(json!({ "message": MEMBER_CREATED }))))
}

/// Replace a member's fields. An unknown id is not an error.
#[tracing::instrument(skip(state, body))]
pub async fn update_member(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<u64>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, ApiError>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let member: MemberData = validate_body(&body)?;
    let rows = match row_id(id) {
        Some(id) => state.store.update_member(id, member).await?,
        None => 0,
    };
    info!(id, rows, "Member update applied");

    Ok((StatusCode::CREATED, Json(json!({ "message": MEMBER_UPDATED }))))
}
