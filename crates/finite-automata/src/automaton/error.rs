//! Error type for automaton queries and export.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutomatonError {
    /// Acceptance was queried before a start state was set.
    #[error("automaton has no start state")]
    MissingStartState,
    #[error("failed to write automaton export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize automaton export: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AutomatonError>;
