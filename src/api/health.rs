use axum::response::Json;
use serde_json::{json, Value};

pub async fn home() -> &'static str {
    "Welcome to the Gym"
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "gym-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
