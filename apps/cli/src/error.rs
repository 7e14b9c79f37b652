//! Error types for the sampler CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors while opening or reading a deck archive.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck archive not found: {}", .0.display())]
    ArchiveNotFound(PathBuf),

    #[error("archive {} has no {member} member", .path.display())]
    MissingCollection { path: PathBuf, member: &'static str },

    #[error("invalid deck archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("collection database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a single notes row could not be turned into a card. Recovered
/// locally: the row is logged and dropped, the run continues.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("column decode failed: {0}")]
    Column(#[from] rusqlite::Error),

    #[error(transparent)]
    Card(#[from] deck_core::CardError),
}
