//! Repository for the `games` table.

use gamestore_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::game::{Game, GameWithGenre, NewGame};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, genre_id, price, release_date";

/// Provides CRUD operations for games.
pub struct GameRepo;

impl GameRepo {
    /// List every game joined with its genre name, ordered by id.
    pub async fn list_summaries<'e, E>(executor: E) -> Result<Vec<GameWithGenre>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, GameWithGenre>(
            "SELECT g.id, g.name, g.price, g.release_date, ge.name AS genre_name
             FROM games g
             JOIN genres ge ON ge.id = g.genre_id
             ORDER BY g.id",
        )
        .fetch_all(executor)
        .await
    }

    /// Find a game by primary key.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Game>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Insert a new game, returning the stored row with its generated id.
    ///
    /// An unknown `genre_id` fails with the `fk_games_genre_id` violation.
    pub async fn create<'e, E>(executor: E, input: &NewGame) -> Result<Game, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO games (name, genre_id, price, release_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&input.name)
            .bind(input.genre_id)
            .bind(input.price)
            .bind(input.release_date)
            .fetch_one(executor)
            .await
    }

    /// Replace every column of the row keyed by `game.id`.
    ///
    /// Returns `false` if no such row exists; nothing is inserted in that case.
    pub async fn overwrite<'e, E>(executor: E, game: &Game) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            "UPDATE games SET
                name = $2,
                genre_id = $3,
                price = $4,
                release_date = $5
             WHERE id = $1",
        )
        .bind(game.id)
        .bind(&game.name)
        .bind(game.genre_id)
        .bind(game.price)
        .bind(game.release_date)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete the game with `id`. Returns `true` if a row was removed.
    pub async fn delete_by_id<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
