//! Entity structs and their mapping to and from the wire DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `From` conversions between the entity and the `gamestore_core::dto` shapes

pub mod game;
pub mod genre;
