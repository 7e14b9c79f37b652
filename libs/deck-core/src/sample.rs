//! Random sampling of a loaded deck.

use rand::rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::types::Card;

/// Draw up to `requested` distinct cards uniformly at random, without
/// replacement. When the request covers the whole deck the result is a full
/// random permutation rather than source order.
pub fn sample(cards: &[Card], requested: usize) -> Vec<Card> {
    let effective = requested.min(cards.len());
    tracing::info!("sampling {} of {} cards", effective, cards.len());

    let mut rng = rng();
    if effective == cards.len() {
        let mut all = cards.to_vec();
        all.shuffle(&mut rng);
        all
    } else {
        cards.choose_multiple(&mut rng, effective).cloned().collect()
    }
}
