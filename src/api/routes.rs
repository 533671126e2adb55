use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::health::{health_check, home};
use super::members::member_routes;
use super::workouts::workout_routes;
use super::AppState;
use crate::services::GymStore;

pub fn create_routes(store: Arc<dyn GymStore>) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .merge(member_routes(state.clone()))
        .merge(workout_routes(state))
        .layer(TraceLayer::new_for_http())
}
