//! Deck factory: the full 52-card set, shuffled.
//!
//! Shuffling goes through the `rand` crate. `create_shuffled_deck` draws
//! entropy from the thread RNG for real games; `shuffled_deck_from_seed`
//! produces a deterministic permutation for tests and replays.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::card::{Card, Rank, Suit, CARDS_PER_DECK};

/// The 52 unique cards in a fixed order: `Suit::ALL` major,
/// `Rank::ALL` minor.
pub fn fresh_deck() -> [Card; CARDS_PER_DECK as usize] {
    let mut cards = [Card(0); CARDS_PER_DECK as usize];
    let mut i = 0usize;
    for &suit in Suit::ALL.iter() {
        for &rank in Rank::ALL.iter() {
            cards[i] = Card::new(suit, rank);
            i += 1;
        }
    }
    cards
}

/// A freshly shuffled 52-card deck. Always succeeds; every card appears
/// exactly once.
pub fn create_shuffled_deck() -> [Card; CARDS_PER_DECK as usize] {
    shuffled_with(&mut rand::thread_rng())
}

/// A deterministically shuffled deck for a given seed.
pub fn shuffled_deck_from_seed(seed: u64) -> [Card; CARDS_PER_DECK as usize] {
    shuffled_with(&mut StdRng::seed_from_u64(seed))
}

fn shuffled_with<R: Rng>(rng: &mut R) -> [Card; CARDS_PER_DECK as usize] {
    let mut deck = fresh_deck();
    deck.shuffle(rng);
    deck
}
