//! Shared fixtures for the deck pipeline integration tests.
//!
//! Builds real deck archives on disk: a `collection.anki2` SQLite database
//! with a notes table, zipped into an `.apkg` the way deck exporters package
//! them.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use rusqlite::{params, Connection};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const NOTES_SCHEMA: &str = "CREATE TABLE notes (
    id INTEGER PRIMARY KEY,
    guid TEXT NOT NULL,
    mid INTEGER NOT NULL,
    mod INTEGER NOT NULL,
    usn INTEGER NOT NULL,
    tags TEXT NOT NULL,
    flds TEXT,
    sfld INTEGER NOT NULL,
    csum INTEGER NOT NULL,
    flags INTEGER NOT NULL,
    data TEXT NOT NULL
)";

/// One notes row to seed into a fixture deck. `flds: None` produces a NULL
/// field blob, which the loader must drop rather than choke on.
pub struct NoteRow {
    pub id: i64,
    pub flds: Option<String>,
    pub sfld: String,
}

impl NoteRow {
    pub fn valid(id: i64, question: &str, answer: &str) -> Self {
        Self {
            id,
            flds: Some(format!("{question}\u{1f}{answer}")),
            sfld: question.to_string(),
        }
    }

    /// A row whose field blob has no separator, so card construction fails.
    pub fn without_separator(id: i64) -> Self {
        Self {
            id,
            flds: Some("just one field".to_string()),
            sfld: "just one field".to_string(),
        }
    }

    pub fn null_fields(id: i64) -> Self {
        Self {
            id,
            flds: None,
            sfld: String::new(),
        }
    }
}

/// Fresh per-test scratch directory under the system temp dir.
pub fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("deck-sampler-test-{}-{}", label, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}

/// Build a deck archive containing a collection database seeded with `rows`.
pub fn build_deck_archive(label: &str, rows: &[NoteRow]) -> PathBuf {
    let dir = scratch_dir(label);
    let db_path = dir.join("collection.anki2");

    let conn = Connection::open(&db_path).expect("failed to create fixture database");
    conn.execute_batch(NOTES_SCHEMA).expect("failed to create notes table");
    for row in rows {
        conn.execute(
            "INSERT INTO notes (id, guid, mid, mod, usn, tags, flds, sfld, csum, flags, data)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                row.id,
                format!("guid-{}", row.id),
                1_000_000,
                1_700_000_000,
                -1,
                "",
                row.flds,
                row.sfld,
                0,
                0,
                ""
            ],
        )
        .expect("failed to insert fixture row");
    }
    drop(conn);

    let archive_path = dir.join(format!("{label}.apkg"));
    write_archive(&archive_path, "collection.anki2", &fs::read(&db_path).unwrap());
    archive_path
}

/// Build an archive that holds some unrelated member instead of a collection.
pub fn build_archive_without_collection(label: &str) -> PathBuf {
    let dir = scratch_dir(label);
    let archive_path = dir.join(format!("{label}.apkg"));
    write_archive(&archive_path, "media", b"{}");
    archive_path
}

fn write_archive(archive_path: &PathBuf, member: &str, contents: &[u8]) {
    let file = File::create(archive_path).expect("failed to create fixture archive");
    let mut writer = ZipWriter::new(file);
    writer
        .start_file(member, SimpleFileOptions::default())
        .expect("failed to start archive member");
    writer.write_all(contents).expect("failed to write archive member");
    writer.finish().expect("failed to finish fixture archive");
}
