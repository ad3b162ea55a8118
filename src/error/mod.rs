//! Error types for the Starforge rules engine.
//!
//! Domain rule violations live in [`game::GameError`]; everything else is
//! an infrastructure failure aggregated into [`Error`] via `thiserror`'s
//! `#[from]` conversions so services can use `?` throughout.

pub mod game;

use thiserror::Error;

pub use game::GameError;

#[derive(Error, Debug)]
pub enum Error {
    /// A game rule rejected the action; no state was mutated.
    #[error(transparent)]
    Game(#[from] GameError),
    /// Database error (query failures, connection issues, constraint
    /// violations). Transient from the caller's point of view: the same
    /// action may succeed on retry.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
    /// Configuration error (missing or invalid environment variables).
    #[error("Missing or invalid environment variable: {0}")]
    Config(#[from] std::env::VarError),
}

impl Error {
    /// Whether the failure is worth retrying without user intervention.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Db(_))
    }
}
