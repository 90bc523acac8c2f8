//! Persistence gateway for the game store.
//!
//! Reads go straight through the pool. Writes run inside a [`DbSession`]:
//! pending changes are flushed by `commit()` and discarded when the session
//! is dropped without committing.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Postgres, Transaction};

pub type DbPool = sqlx::PgPool;

/// A unit of work over the game store.
pub type DbSession = Transaction<'static, Postgres>;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(max_connections, "Opening database pool");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Open a new session. Nothing it writes is visible to other connections
/// until it is committed.
pub async fn begin(pool: &DbPool) -> Result<DbSession, sqlx::Error> {
    pool.begin().await
}
