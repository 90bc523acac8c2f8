//! Genre entity and DTO mapping.

use gamestore_core::dto::GenreDto;
use gamestore_core::types::DbId;
use sqlx::FromRow;

/// A row from the `genres` table.
#[derive(Debug, Clone, FromRow)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}

impl From<Genre> for GenreDto {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
        }
    }
}
