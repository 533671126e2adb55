use async_trait::async_trait;
use futures::future::BoxFuture;
use sqlx::{Connection, PgConnection};
use std::sync::Arc;
use tracing::{error, warn};

use crate::config::ConnectionProvider;
use crate::errors::StoreError;
use crate::models::{Member, MemberData, WorkoutSession, WorkoutSessionData};
use crate::repositories::{MemberRepository, WorkoutRepository};

/// Storage operations the HTTP layer depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GymStore: Send + Sync {
    async fn list_members(&self) -> Result<Vec<Member>, StoreError>;

    async fn create_member(&self, member: MemberData) -> Result<(), StoreError>;

    /// Rows matched by the update; zero when no member has `id`.
    async fn update_member(&self, id: i64, member: MemberData) -> Result<u64, StoreError>;

    async fn list_workouts(&self) -> Result<Vec<WorkoutSession>, StoreError>;

    async fn create_workout(&self, session: WorkoutSessionData) -> Result<(), StoreError>;

    /// Rows matched by the update; zero when no session has `id`.
    async fn update_workout(&self, id: i64, session: WorkoutSessionData) -> Result<u64, StoreError>;

    async fn list_workouts_by_member(&self, member_id: i64) -> Result<Vec<WorkoutSession>, StoreError>;
}

/// Postgres-backed store. Every call acquires its own connection, runs one
/// statement and releases the connection before returning.
#[derive(Clone)]
pub struct GymService {
    provider: Arc<dyn ConnectionProvider>,
}

impl GymService {
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self { provider }
    }

    async fn with_connection<T, F>(&self, operation: &'static str, run: F) -> Result<T, StoreError>
    where
        T: Send,
        F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, sqlx::Error>> + Send,
    {
        let mut conn = match self.provider.acquire().await {
            Ok(conn) => conn,
            Err(e) => {
                error!(operation, error = %e, "Database connection failed");
                return Err(StoreError::Unavailable(e));
            }
        };

        let result = run(&mut conn).await;

        if let Err(e) = conn.close().await {
            warn!(operation, error = %e, "Failed to close database connection");
        }

        result.map_err(|e| {
            error!(operation, error = %e, "Database statement failed");
            StoreError::Execution(e)
        })
    }
}

#[async_trait]
impl GymStore for GymService {
    async fn list_members(&self) -> Result<Vec<Member>, StoreError> {
        self.with_connection("list_members", |conn| Box::pin(MemberRepository::list(conn)))
            .await
    }

    async fn create_member(&self, member: MemberData) -> Result<(), StoreError> {
        self.with_connection("create_member", move |conn| {
            Box::pin(async move { MemberRepository::create(conn, &member).await })
        })
        .await?;
        Ok(())
    }

    async fn update_member(&self, id: i64, member: MemberData) -> Result<u64, StoreError> {
        self.with_connection("update_member", move |conn| {
            Box::pin(async move { MemberRepository::update(conn, id, &member).await })
        })
        .await
    }

    async fn list_workouts(&self) -> Result<Vec<WorkoutSession>, StoreError> {
        self.with_connection("list_workouts", |conn| Box::pin(WorkoutRepository::list(conn)))
            .await
    }

    async fn create_workout(&self, session: WorkoutSessionData) -> Result<(), StoreError> {
        self.with_connection("create_workout", move |conn| {
            Box::pin(async move { WorkoutRepository::create(conn, &session).await })
        })
        .await?;
        Ok(())
    }

    async fn update_workout(&self, id: i64, session: WorkoutSessionData) -> Result<u64, StoreError> {
        self.with_connection("update_workout", move |conn| {
            Box::pin(async move { WorkoutRepository::update(conn, id, &session).await })
        })
        .await
    }

    async fn list_workouts_by_member(&self, member_id: i64) -> Result<Vec<WorkoutSession>, StoreError> {
        self.with_connection("list_workouts_by_member", move |conn| {
            Box::pin(WorkoutRepository::list_by_member(conn, member_id))
        })
        .await
    }
}
