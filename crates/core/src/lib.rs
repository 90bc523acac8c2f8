//! Shared types, DTOs, and the domain error taxonomy for the game store.

pub mod dto;
pub mod error;
pub mod types;
