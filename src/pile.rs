//! Pile identities and the pile container.
//!
//! A `Pile` is a pure ordered stack of cards: it knows nothing about
//! Klondike legality. Acceptance rules live in `crate::rules`, and the
//! engine in `crate::game` decides when to call them. The `PileId` tag
//! is the only place a pile's role is recorded.

use crate::card::Card;
use crate::error::EngineError;

/// Number of tableau columns.
pub const NUM_TABLEAUS: u8 = 7;
/// Number of foundation piles.
pub const NUM_FOUNDATIONS: u8 = 4;

/// Identity of one of the 13 piles in a game.
///
/// The payload of `Foundation` is 0..=3 and of `Tableau` 0..=6. Ids are
/// plain values; the piles themselves are held by the `Game` and looked
/// up by id, so a card can record where it sits without owning anything.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PileId {
    Stock,
    Discard,
    Foundation(u8),
    Tableau(u8),
}

/// The role a pile plays, derived from its id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PileKind {
    Stock,
    Discard,
    Foundation,
    Tableau,
}

/// The four foundation ids in their fixed scan order.
pub const FOUNDATION_IDS: [PileId; NUM_FOUNDATIONS as usize] = [
    PileId::Foundation(0),
    PileId::Foundation(1),
    PileId::Foundation(2),
    PileId::Foundation(3),
];

/// The seven tableau ids, left to right.
pub const TABLEAU_IDS: [PileId; NUM_TABLEAUS as usize] = [
    PileId::Tableau(0),
    PileId::Tableau(1),
    PileId::Tableau(2),
    PileId::Tableau(3),
    PileId::Tableau(4),
    PileId::Tableau(5),
    PileId::Tableau(6),
];

impl PileId {
    /// The role this id designates.
    #[inline]
    pub fn kind(self) -> PileKind {
        match self {
            PileId::Stock => PileKind::Stock,
            PileId::Discard => PileKind::Discard,
            PileId::Foundation(_) => PileKind::Foundation,
            PileId::Tableau(_) => PileKind::Tableau,
        }
    }

    /// All 13 pile ids: stock, discard, foundations, tableaus.
    pub fn all() -> impl Iterator<Item = PileId> {
        [PileId::Stock, PileId::Discard]
            .into_iter()
            .chain(FOUNDATION_IDS)
            .chain(TABLEAU_IDS)
    }
}

/// An ordered stack of cards. The last element is the top.
#[derive(Clone, Debug)]
pub struct Pile {
    pub id: PileId,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(id: PileId) -> Self {
        Pile { id, cards: Vec::new() }
    }

    /// Append a card on top.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove a specific card wherever it sits in the pile.
    ///
    /// Signals `CardNotFound` (and changes nothing) if the card is not
    /// present.
    pub fn remove_card(&mut self, card: Card) -> Result<(), EngineError> {
        match self.position_of(card) {
            Some(idx) => {
                self.cards.remove(idx);
                Ok(())
            }
            None => Err(EngineError::CardNotFound { card, pile: self.id }),
        }
    }

    /// The top card, if any.
    #[inline]
    pub fn top_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Bottom-to-top view of the cards.
    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Position of a card counted from the bottom, if present.
    #[inline]
    pub fn position_of(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// Remove and return the top card, if any.
    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Split off the suffix starting at `index` (bottom-based),
    /// preserving order. Used for moving tableau runs as a unit.
    pub fn take_from(&mut self, index: usize) -> Vec<Card> {
        self.cards.split_off(index)
    }

    /// Empty the pile. Used on restart.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Reverse the sequence in place. Used when recycling the discard
    /// back into the stock: the discard accumulates most-recent-on-top,
    /// but the stock must resume in the original relative order.
    pub fn reverse_order(&mut self) {
        self.cards.reverse();
    }
}
