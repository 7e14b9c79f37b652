//! Core types for the deck sampler.

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Separator between sub-fields of a note's field blob (ASCII unit separator).
pub const FIELD_SEPARATOR: char = '\u{1f}';

/// One notes-table row exactly as read from the collection database.
///
/// Columns in schema order: id, guid, mid, mod, usn, tags, flds, sfld,
/// csum, flags, data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawNote {
    pub id: i64,
    pub guid: String,
    pub model_id: i64,
    pub modified_at: i64,
    pub usn: i64,
    pub tags: String,
    pub fields: String,
    pub sort_field: String,
    pub checksum: i64,
    pub flags: i64,
    pub data: String,
}

/// A validated flashcard.
///
/// Construction guarantees the field blob holds at least a question/answer
/// pair, so `answer` always has something to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub guid: String,
    pub model_id: i64,
    pub modified_at: i64,
    pub usn: i64,
    pub tags: String,
    fields: String,
    sort_field: String,
    pub checksum: i64,
    pub flags: i64,
    pub data: String,
}

impl TryFrom<RawNote> for Card {
    type Error = CardError;

    fn try_from(raw: RawNote) -> Result<Self, Self::Error> {
        if !raw.fields.contains(FIELD_SEPARATOR) {
            return Err(CardError::MissingSeparator { id: raw.id });
        }

        Ok(Self {
            id: raw.id,
            guid: raw.guid,
            model_id: raw.model_id,
            modified_at: raw.modified_at,
            usn: raw.usn,
            tags: raw.tags,
            fields: raw.fields,
            sort_field: raw.sort_field,
            checksum: raw.checksum,
            flags: raw.flags,
            data: raw.data,
        })
    }
}

impl Card {
    /// Display text for the question side: the note's sort field.
    pub fn question(&self) -> &str {
        &self.sort_field
    }

    /// Everything after the first field separator, trimmed of surrounding
    /// whitespace. Notes with more than two fields keep their remaining
    /// separators intact.
    pub fn answer(&self) -> &str {
        match self.fields.split_once(FIELD_SEPARATOR) {
            Some((_, rest)) => rest.trim(),
            None => "",
        }
    }

    /// The raw delimited field blob.
    pub fn fields(&self) -> &str {
        &self.fields
    }
}
