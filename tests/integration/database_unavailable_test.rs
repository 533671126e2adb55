use axum::http::{Method, StatusCode};
use axum::Router;
use gym_api::api::routes::create_routes;
use gym_api::config::{DatabaseConfig, PgConnectionProvider};
use gym_api::services::GymService;
use serde_json::json;
use std::sync::Arc;

use crate::common::{init_test_logging, ApiTestHelpers};

/// Router backed by the real Postgres store, pointed at a port nothing listens on.
fn unreachable_app() -> Router {
    init_test_logging();
    let config = DatabaseConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        database: "gym_db".to_string(),
        user: "postgres".to_string(),
        password: "s3cret".to_string(),
    };
    let provider = Arc::new(PgConnectionProvider::new(&config));
    create_routes(Arc::new(GymService::new(provider)))
}

#[cfg(test)]
mod database_unavailable_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_members_returns_generic_500() {
        let app = unreachable_app();

        let request = ApiTestHelpers::json_request(Method::GET, "/members", None);
        let (status, text) = ApiTestHelpers::send_raw(&app, request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&text).unwrap(),
            json!({ "error": "Database connection failed" })
        );
        assert!(!text.contains("127.0.0.1"));
        assert!(!text.to_lowercase().contains("refused"));
    }

    #[tokio::test]
    async fn test_every_storage_route_reports_unavailable() {
        let app = unreachable_app();
        let member = json!({ "name": "Alex", "age": 30, "trainer_id": 2 });
        let workout = json!({
            "date": "2024-04-02",
            "duration_min": 30,
            "cal_burned": 250,
            "member_id": 1,
            "trainer_id": 2
        });

        let cases = [
            (Method::GET, "/members", None),
            (Method::POST, "/members", Some(member.clone())),
            (Method::PUT, "/members/3", Some(member)),
            (Method::GET, "/workouts", None),
            (Method::POST, "/workouts", Some(workout.clone())),
            (Method::PUT, "/workouts/3", Some(workout)),
            (Method::GET, "/members/3/workouts", None),
        ];

        for (method, uri, body) in cases {
            let (status, body) = ApiTestHelpers::send(&app, method.clone(), uri, body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", method, uri);
            assert_eq!(body, json!({ "error": "Database connection failed" }));
        }
    }

    #[tokio::test]
    async fn test_validation_runs_before_connecting() {
        let app = unreachable_app();

        let (status, body) = ApiTestHelpers::send(
            &app,
            Method::POST,
            "/workouts",
            Some(json!({ "duration_min": 30 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.get("date").is_some());
        assert!(body.get("duration_min").is_none());
    }
}
