use sqlx::PgConnection;
use tracing::debug;

use crate::models::{WorkoutSession, WorkoutSessionData};

/// Statements against the `workout_sessions` table.
pub struct WorkoutRepository;

impl WorkoutRepository {
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<WorkoutSession>, sqlx::Error> {
        let sessions = sqlx::query_as::<_, WorkoutSession>(
            "SELECT id, date, duration_min, cal_burned, member_id, trainer_id FROM workout_sessions ORDER BY id",
        )
        .fetch_all(conn)
        .await?;

        debug!(count = sessions.len(), "Fetched workout sessions");
        Ok(sessions)
    }

    pub async fn list_by_member(
        conn: &mut PgConnection,
        member_id: i64,
    ) -> Result<Vec<WorkoutSession>, sqlx::Error> {
        let sessions = sqlx::query_as::<_, WorkoutSession>(
            r#"
            SELECT id, date, duration_min, cal_burned, member_id, trainer_id
            FROM workout_sessions
            WHERE member_id = $1
            ORDER BY id
            "#,
        )
        .bind(member_id)
        .fetch_all(conn)
        .await?;

        debug!(member_id, count = sessions.len(), "Fetched member workout sessions");
        Ok(sessions)
    }

    pub async fn create(
        conn: &mut PgConnection,
        session: &WorkoutSessionData,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO workout_sessions (date, duration_min, cal_burned, member_id, trainer_id)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(session.date)
        .bind(session.duration_min)
        .bind(session.cal_burned)
        .bind(session.member_id)
        .bind(session.trainer_id)
        .execute(conn)
        .await?;

        Ok(result.rows_affected())
    }

    /// Returns the number of rows matched; zero when `id` does not exist.
    pub async fn update(
        conn: &mut PgConnection,
        id: i64,
        session: &WorkoutSessionData,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE workout_sessions
            SET date = $1,
                duration_min = $2,
                cal_burned = $3,
                member_id = $4,
                trainer_id = $5
            WHERE id = $6
            "#,
        )
        .bind(session.date)
        .bind(session.duration_min)
        .bind(session.cal_burned)
        .bind(session.member_id)
        .bind(session.trainer_id)
        .bind(id)
        .execute(conn)
        .await?;

        debug!(id, rows = result.rows_affected(), "Updated workout session");
        Ok(result.rows_affected())
    }
}
