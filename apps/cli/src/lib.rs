//! Deck sampler: pull a random selection of cards out of a packaged deck
//! archive and quiz through them interactively.
//!
//! Pipeline: archive path -> extracted collection database -> parsed cards
//! -> random sample -> interactive reveal loop.

pub mod archive;
pub mod deck;
pub mod error;
pub mod present;

use std::path::Path;

pub use error::{DeckError, RowError};

/// Load the deck at `deck_path`, sample up to `requested` cards and run the
/// interactive loop over them.
pub fn run(deck_path: &Path, requested: usize) -> anyhow::Result<()> {
    let conn = archive::open_collection(deck_path)?;
    let cards = deck::load_cards(&conn)?;
    let sampled = deck_core::sample(&cards, requested);
    present::present(&sampled)
}
