//! Error types for deck-core.

use thiserror::Error;

/// Errors that can occur when building a card from a raw note.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("note {id} has no field separator in its field blob")]
    MissingSeparator { id: i64 },
}
