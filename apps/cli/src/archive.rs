//! Extraction of the collection database from a packaged deck archive.
//!
//! A deck archive is a ZIP container holding one canonical SQLite database
//! member. The member is extracted once into a temp directory keyed by a
//! hash of the archive path, so repeated runs against the same deck reuse
//! the extraction instead of re-unpacking or colliding with other decks.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use sha2::{Digest, Sha256};
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::DeckError;

/// Name of the embedded database member inside a deck archive.
pub const COLLECTION_MEMBER: &str = "collection.anki2";

/// Deterministic extraction directory for an archive path.
pub fn extraction_dir(deck_path: &Path) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(deck_path.to_string_lossy().as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    std::env::temp_dir().join(format!("deck-sampler-{}", &digest[..16]))
}

/// Extract the collection database from `deck_path` (skipping extraction if
/// a previous run already cached it) and open it read-only.
pub fn open_collection(deck_path: &Path) -> Result<Connection, DeckError> {
    let dir = extraction_dir(deck_path);
    let db_path = dir.join(COLLECTION_MEMBER);

    if db_path.exists() {
        tracing::debug!("reusing extracted collection at {}", db_path.display());
    } else {
        extract_collection(deck_path, &dir, &db_path)?;
    }

    let conn = Connection::open_with_flags(&db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    Ok(conn)
}

fn extract_collection(deck_path: &Path, dir: &Path, db_path: &Path) -> Result<(), DeckError> {
    let file = File::open(deck_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DeckError::ArchiveNotFound(deck_path.to_path_buf()),
        _ => DeckError::Io(e),
    })?;

    let mut archive = ZipArchive::new(file)?;
    let mut member = archive.by_name(COLLECTION_MEMBER).map_err(|e| match e {
        ZipError::FileNotFound => DeckError::MissingCollection {
            path: deck_path.to_path_buf(),
            member: COLLECTION_MEMBER,
        },
        other => DeckError::Archive(other),
    })?;

    fs::create_dir_all(dir)?;

    // Stage then rename so a concurrent or interrupted run never opens a
    // half-written database.
    let staging = dir.join(format!("{COLLECTION_MEMBER}.part"));
    let mut out = File::create(&staging)?;
    io::copy(&mut member, &mut out)?;
    fs::rename(&staging, db_path)?;

    tracing::debug!("extracted {} to {}", COLLECTION_MEMBER, db_path.display());
    Ok(())
}
