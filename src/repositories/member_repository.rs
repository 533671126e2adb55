use sqlx::PgConnection;
use tracing::debug;

use crate::models::{Member, MemberData};

/// Statements against the `members` table.
///
/// Each call runs exactly one statement on the caller's connection. Writes
/// are not wrapped in a transaction, so they are committed as soon as the
/// statement succeeds.
pub struct MemberRepository;

impl MemberRepository {
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Member>, sqlx::Error> {
        let members = sqlx::query_as::<_, Member>(
            "SELECT id, name, age, trainer_id FROM members ORDER BY id",
        )
        .fetch_all(conn)
        .await?;

        debug!(count = members.len(), "Fetched members");
        Ok(members)
    }

    pub async fn create(conn: &mut PgConnection, member: &MemberData) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO members (name, age, trainer_id) VALUES ($1, $2, $3)")
            .bind(&member.name)
            .bind(member.age)
            .bind(member.trainer_id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Returns the number of rows matched; zero when `id` does not exist.
    pub async fn update(
        conn: &mut PgConnection,
        id: i64,
        member: &MemberData,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE members SET name = $1, age = $2, trainer_id = $3 WHERE id = $4",
        )
        .bind(&member.name)
        .bind(member.age)
        .bind(member.trainer_id)
        .bind(id)
        .execute(conn)
        .await?;

        debug!(id, rows = result.rows_affected(), "Updated member");
        Ok(result.rows_affected())
    }
}
