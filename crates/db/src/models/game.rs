//! Game entity, its joined projection, and DTO mapping.

use chrono::NaiveDate;
use gamestore_core::dto::{CreateGame, GameDetails, GameSummary, UpdateGame};
use gamestore_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::FromRow;

/// A row from the `games` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Game {
    pub id: DbId,
    pub name: String,
    pub genre_id: DbId,
    pub price: Decimal,
    pub release_date: NaiveDate,
}

/// A game that has not been stored yet. The id is assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGame {
    pub name: String,
    pub genre_id: DbId,
    pub price: Decimal,
    pub release_date: NaiveDate,
}

/// A `games` row joined with the name of its genre.
#[derive(Debug, Clone, FromRow)]
pub struct GameWithGenre {
    pub id: DbId,
    pub name: String,
    pub price: Decimal,
    pub release_date: NaiveDate,
    pub genre_name: String,
}

impl Game {
    /// Build the full replacement record for the game with `id`.
    pub fn from_update(id: DbId, input: UpdateGame) -> Self {
        Self {
            id,
            name: input.name,
            genre_id: input.genre_id,
            price: input.price,
            release_date: input.release_date,
        }
    }
}

impl From<CreateGame> for NewGame {
    fn from(input: CreateGame) -> Self {
        Self {
            name: input.name,
            genre_id: input.genre_id,
            price: input.price,
            release_date: input.release_date,
        }
    }
}

impl From<Game> for GameDetails {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            name: game.name,
            genre_id: game.genre_id,
            price: game.price,
            release_date: game.release_date,
        }
    }
}

impl From<GameWithGenre> for GameSummary {
    fn from(row: GameWithGenre) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            release_date: row.release_date,
            genre: row.genre_name,
        }
    }
}
