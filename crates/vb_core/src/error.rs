use thiserror::Error;

/// Errors surfaced by the balancing engine and its JSON boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// The roster handed to the engine is not the exact session size.
    /// No partial output is produced; the caller must fix the roster.
    #[error("wrong roster size: expected {expected} players, found {found}")]
    WrongRosterSize { expected: usize, found: usize },

    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
