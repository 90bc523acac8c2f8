//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods.
//! Methods accept any `PgExecutor`, so the same statement runs against the
//! pool for reads or against a `DbSession` for writes.

pub mod game_repo;
pub mod genre_repo;

pub use game_repo::GameRepo;
pub use genre_repo::GenreRepo;
