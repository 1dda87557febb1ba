//! Random card drawing.
//!
//! Draws distinct cards from the catalog deck, each with an independent
//! 50% chance of landing reversed.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::index;

use crate::reading::DrawnCard;

/// Draw `count` distinct cards from a deck of `deck_size` cards.
///
/// `count` is clamped to the deck size, so asking for more cards than the
/// deck holds drains the deck rather than failing. Each drawn card is
/// reversed with probability 1/2.
pub fn draw(count: usize, deck_size: u32, rng: &mut StdRng) -> Vec<DrawnCard> {
    let deck_size = deck_size as usize;
    let count = count.min(deck_size);

    index::sample(rng, deck_size, count)
        .iter()
        .map(|i| DrawnCard::new(i as u32, rng.random_bool(0.5)))
        .collect()
}
