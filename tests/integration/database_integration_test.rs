// Repository and service tests against a real Postgres container.

use axum::http::{Method, StatusCode};
use chrono::NaiveDate;
use gym_api::api::routes::create_routes;
use gym_api::models::*;
use gym_api::repositories::{MemberRepository, WorkoutRepository};
use gym_api::services::{GymService, GymStore};
use serde_json::json;
use std::sync::Arc;

use crate::common::{init_test_logging, ApiTestHelpers, MockDataGenerator, TestDatabase};

#[cfg(test)]
mod database_integration_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_member_repository_round_trip() {
        let test_db = TestDatabase::new().await;
        let mut conn = test_db.connection().await;

        let member = MemberData {
            name: "Alex".to_string(),
            age: 30,
            trainer_id: 2,
        };
        let created = MemberRepository::create(&mut conn, &member).await.unwrap();
        assert_eq!(created, 1);

        let members = MemberRepository::list(&mut conn).await.unwrap();
        assert_eq!(
            members,
            vec![Member {
                id: 1,
                name: "Alex".to_string(),
                age: 30,
                trainer_id: 2,
            }]
        );

        let renamed = MemberData {
            name: "Alexandra".to_string(),
            ..member
        };
        assert_eq!(MemberRepository::update(&mut conn, 1, &renamed).await.unwrap(), 1);
        assert_eq!(MemberRepository::update(&mut conn, 999, &renamed).await.unwrap(), 0);
        assert_eq!(MemberRepository::list(&mut conn).await.unwrap()[0].name, "Alexandra");
    }

    #[tokio::test]
    async fn test_values_are_bound_not_interpolated() {
        let test_db = TestDatabase::new().await;
        let mut conn = test_db.connection().await;

        let hostile = MemberData {
            name: "Robert'); DROP TABLE members; --".to_string(),
            age: 12,
            trainer_id: 1,
        };
        MemberRepository::create(&mut conn, &hostile).await.unwrap();

        let members = MemberRepository::list(&mut conn).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, hostile.name);
    }

    #[tokio::test]
    async fn test_workout_repository_filters_by_member() {
        let test_db = TestDatabase::new().await;
        let mut conn = test_db.connection().await;

        for member_id in [1, 2, 1] {
            let session = MockDataGenerator::workout_session(member_id);
            WorkoutRepository::create(&mut conn, &session).await.unwrap();
        }

        assert_eq!(WorkoutRepository::list(&mut conn).await.unwrap().len(), 3);

        let first = WorkoutRepository::list_by_member(&mut conn, 1).await.unwrap();
        assert_eq!(first.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);

        let nobody = WorkoutRepository::list_by_member(&mut conn, 42).await.unwrap();
        assert!(nobody.is_empty());

        let update = WorkoutSessionData {
            date: NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
            duration_min: 90,
            cal_burned: 800,
            member_id: 2,
            trainer_id: 5,
        };
        assert_eq!(WorkoutRepository::update(&mut conn, 3, &update).await.unwrap(), 1);
        assert_eq!(WorkoutRepository::update(&mut conn, 300, &update).await.unwrap(), 0);
        assert_eq!(WorkoutRepository::list_by_member(&mut conn, 2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_service_uses_fresh_connection_per_call() {
        let test_db = TestDatabase::new().await;
        let service = GymService::new(Arc::new(test_db.provider()));

        let member = MockDataGenerator::member();
        service.create_member(member.clone()).await.unwrap();

        let members = service.list_members().await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, member.name);
        assert_eq!(members[0].age, member.age);
        assert_eq!(members[0].trainer_id, member.trainer_id);

        assert_eq!(service.update_member(999, member).await.unwrap(), 0);
        assert!(service.list_workouts_by_member(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bigint_ids_compare_against_integer_columns() {
        let test_db = TestDatabase::new().await;
        let mut conn = test_db.connection().await;

        let member = MockDataGenerator::member();
        MemberRepository::create(&mut conn, &member).await.unwrap();
        let session = MockDataGenerator::workout_session(1);
        WorkoutRepository::create(&mut conn, &session).await.unwrap();

        assert_eq!(MemberRepository::update(&mut conn, 5_000_000_000, &member).await.unwrap(), 0);
        assert_eq!(WorkoutRepository::update(&mut conn, i64::MAX, &session).await.unwrap(), 0);
        assert!(WorkoutRepository::list_by_member(&mut conn, 5_000_000_000)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_http_writes_are_listed_back() {
        init_test_logging();
        let test_db = TestDatabase::new().await;
        let app = create_routes(Arc::new(GymService::new(Arc::new(test_db.provider()))));

        let (status, _) = ApiTestHelpers::send(
            &app,
            Method::POST,
            "/members",
            Some(json!({ "name": "Alex", "age": 30, "trainer_id": 2 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = ApiTestHelpers::send(
            &app,
            Method::PUT,
            "/members/1",
            Some(json!({ "name": "Alex", "age": 31, "trainer_id": "4" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = ApiTestHelpers::send(&app, Method::GET, "/members", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "id": 1, "name": "Alex", "age": 31, "trainer_id": 4 }]));

        let (status, _) = ApiTestHelpers::send(
            &app,
            Method::POST,
            "/workouts",
            Some(json!({
                "date": "2024-03-09",
                "duration_min": 45,
                "cal_burned": 380,
                "member_id": 1,
                "trainer_id": 4
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) =
            ApiTestHelpers::send(&app, Method::GET, "/members/1/workouts", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{
                "id": 1,
                "date": "2024-03-09",
                "duration_min": 45,
                "cal_burned": 380,
                "member_id": 1,
                "trainer_id": 4
            }])
        );

        let (status, body) =
            ApiTestHelpers::send(&app, Method::GET, "/members/5000000000/workouts", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}
