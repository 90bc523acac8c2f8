//! Repository for the `genres` table.

use sqlx::PgExecutor;

use crate::models::genre::Genre;

/// Read-only access to genres.
pub struct GenreRepo;

impl GenreRepo {
    /// List all genres ordered by id.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Genre>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY id")
            .fetch_all(executor)
            .await
    }

    /// Number of genre rows. Zero means the seed migration has not run.
    pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar("SELECT COUNT(*) FROM genres")
            .fetch_one(executor)
            .await
    }
}
