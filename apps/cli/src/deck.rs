//! Loading and parsing note rows from an opened collection database.

use deck_core::{Card, RawNote};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row};

use crate::error::{DeckError, RowError};

const NOTES_QUERY: &str =
    "SELECT id, guid, mid, mod, usn, tags, flds, sfld, csum, flags, data FROM notes";

/// Full scan of the notes table. Rows that fail to decode are logged and
/// dropped; the rest come back in encounter order.
pub fn load_cards(conn: &Connection) -> Result<Vec<Card>, DeckError> {
    let mut stmt = conn.prepare(NOTES_QUERY)?;
    let rows = stmt.query_map([], |row| Ok(parse_row(row)))?;

    let mut cards = Vec::new();
    for parsed in rows {
        if let Some(card) = parsed? {
            cards.push(card);
        }
    }

    tracing::info!("loaded {} cards", cards.len());
    Ok(cards)
}

/// Map one notes row to a card. Never propagates a failure: a row that does
/// not decode is logged at warn severity and skipped.
pub fn parse_row(row: &Row<'_>) -> Option<Card> {
    match try_parse_row(row) {
        Ok(card) => Some(card),
        Err(err) => {
            tracing::warn!("skipping unparsable note row: {err}");
            None
        }
    }
}

fn try_parse_row(row: &Row<'_>) -> Result<Card, RowError> {
    let raw = RawNote {
        id: row.get(0)?,
        guid: row.get(1)?,
        model_id: row.get(2)?,
        modified_at: row.get(3)?,
        usn: row.get(4)?,
        tags: row.get(5)?,
        fields: row.get(6)?,
        sort_field: sort_field_text(row)?,
        checksum: row.get(8)?,
        flags: row.get(9)?,
        data: row.get(10)?,
    };
    Ok(Card::try_from(raw)?)
}

/// `sfld` has integer affinity in the collection schema, so purely numeric
/// sort fields come back as integers rather than text.
fn sort_field_text(row: &Row<'_>) -> Result<String, rusqlite::Error> {
    match row.get_ref(7)? {
        ValueRef::Text(text) => Ok(String::from_utf8_lossy(text).into_owned()),
        ValueRef::Integer(n) => Ok(n.to_string()),
        other => Err(rusqlite::Error::InvalidColumnType(
            7,
            "sfld".to_string(),
            other.data_type(),
        )),
    }
}
