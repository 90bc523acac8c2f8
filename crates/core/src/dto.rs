//! Wire-facing data-transfer objects for the `/games` and `/genre` resources.
//!
//! These shapes are what clients send and receive. They carry no storage
//! concerns; conversion to and from database rows lives in `gamestore-db`.
//! All field names are camelCase on the wire.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::DbId;

/// Largest price that fits `games.price NUMERIC(6, 2)`.
const MAX_PRICE_CENTS: i64 = 999_999;

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// One entry of `GET /games`. The genre is flattened to its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: DbId,
    pub name: String,
    pub price: Decimal,
    pub release_date: NaiveDate,
    pub genre: String,
}

/// Full representation of a single game. The genre is flattened to its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetails {
    pub id: DbId,
    pub name: String,
    pub genre_id: DbId,
    pub price: Decimal,
    pub release_date: NaiveDate,
}

/// Entry of `GET /genre`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreDto {
    pub id: DbId,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body of `POST /games`. Every field is required.
///
/// `name` is bounded by the `games.name VARCHAR(50)` column.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGame {
    #[validate(length(min = 1, max = 50, message = "must be 1 to 50 characters"))]
    pub name: String,
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub genre_id: DbId,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    pub release_date: NaiveDate,
}

/// Body of `PUT /games/{id}`. Every field is required: the update replaces
/// the whole record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGame {
    #[validate(length(min = 1, max = 50, message = "must be 1 to 50 characters"))]
    pub name: String,
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub genre_id: DbId,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    pub release_date: NaiveDate,
}

/// Decimal places kept by `games.price NUMERIC(6, 2)`.
const PRICE_SCALE: u32 = 2;

/// Prices are non-negative and must fit the column: at most `9999.99`, in
/// whole cents. Finer prices would be rounded on insert and read back changed.
fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    let max = Decimal::new(MAX_PRICE_CENTS, 2);
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("range").with_message("must not be negative".into()));
    }
    if *price > max {
        return Err(ValidationError::new("range").with_message("must be at most 9999.99".into()));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::new("scale").with_message("must be in whole cents".into()));
    }
    Ok(())
}
