//! The move validator: pure legality predicates, no side effects.
//!
//! Piles are pure containers, so every acceptance decision is made here
//! by exhaustive matching on the destination's `PileKind`. The engine
//! calls `is_legal` before mutating anything; calling it any number of
//! times with the same arguments returns the same answer and changes
//! nothing.

use crate::card::{Card, Rank};
use crate::pile::{Pile, PileId, PileKind};

/// True if `card`, currently sitting in `source`, may be placed on top
/// of `dest`.
///
/// The full rule set:
/// - Foundation, empty: only an Ace.
/// - Foundation, non-empty: same suit, rank exactly one above the top.
/// - Tableau, empty: only a King.
/// - Tableau, non-empty: opposite color, rank exactly one below the top.
/// - Stock and Discard are never valid destinations, and neither is the
///   pile the card already sits in.
pub fn is_legal(card: Card, source: PileId, dest: &Pile) -> bool {
    if dest.id == source {
        return false;
    }
    match dest.id.kind() {
        PileKind::Stock | PileKind::Discard => false,
        PileKind::Foundation => match dest.top_card() {
            None => card.rank() == Rank::Ace,
            Some(top) => is_suit_successor(card, top),
        },
        PileKind::Tableau => match dest.top_card() {
            None => card.rank() == Rank::King,
            Some(top) => is_one_lower_opposite_color(card, top),
        },
    }
}

/// Foundation stacking: `card` continues `top`'s suit run upward.
#[inline]
pub fn is_suit_successor(card: Card, top: Card) -> bool {
    card.suit() == top.suit() && card.rank_number() == top.rank_number() + 1
}

/// Tableau stacking: `card` is one rank below `top` and the opposite
/// color.
#[inline]
pub fn is_one_lower_opposite_color(card: Card, top: Card) -> bool {
    card.rank_number() + 1 == top.rank_number() && card.color() != top.color()
}

/// True if the slice (bottom-to-top) is a strictly descending,
/// alternating-color run. Single cards count as runs.
///
/// The engine maintains this as an invariant of every tableau face-up
/// suffix; tests use it to check that moves never break it.
pub fn is_valid_run(cards: &[Card]) -> bool {
    if cards.is_empty() {
        return false;
    }
    cards
        .windows(2)
        .all(|pair| is_one_lower_opposite_color(pair[1], pair[0]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn pile_with(id: PileId, cards: &[Card]) -> Pile {
        let mut p = Pile::new(id);
        for &c in cards {
            p.add_card(c);
        }
        p
    }

    #[test]
    fn ace_to_empty_foundation_only() {
        let empty = Pile::new(PileId::Foundation(0));
        let ace = Card::new(Suit::Hearts, Rank::Ace);
        let two = Card::new(Suit::Hearts, Rank::Two);

        assert!(is_legal(ace, PileId::Discard, &empty));
        assert!(!is_legal(two, PileId::Discard, &empty));
    }

    #[test]
    fn foundation_requires_same_suit_successor() {
        let f = pile_with(PileId::Foundation(1), &[Card::new(Suit::Spades, Rank::Ace)]);
        let two_s = Card::new(Suit::Spades, Rank::Two);
        let two_c = Card::new(Suit::Clubs, Rank::Two);
        let three_s = Card::new(Suit::Spades, Rank::Three);

        assert!(is_legal(two_s, PileId::Tableau(0), &f));
        assert!(!is_legal(two_c, PileId::Tableau(0), &f), "wrong suit");
        assert!(!is_legal(three_s, PileId::Tableau(0), &f), "skips a rank");
    }

    #[test]
    fn king_to_empty_tableau_only() {
        let empty = Pile::new(PileId::Tableau(4));
        let king = Card::new(Suit::Diamonds, Rank::King);
        let queen = Card::new(Suit::Diamonds, Rank::Queen);

        assert!(is_legal(king, PileId::Tableau(0), &empty));
        assert!(!is_legal(queen, PileId::Tableau(0), &empty));
    }

    #[test]
    fn tableau_requires_descending_alternating() {
        let t = pile_with(PileId::Tableau(2), &[Card::new(Suit::Hearts, Rank::Eight)]);
        let seven_s = Card::new(Suit::Spades, Rank::Seven);
        let seven_d = Card::new(Suit::Diamonds, Rank::Seven);
        let six_s = Card::new(Suit::Spades, Rank::Six);

        assert!(is_legal(seven_s, PileId::Discard, &t));
        assert!(!is_legal(seven_d, PileId::Discard, &t), "same color");
        assert!(!is_legal(six_s, PileId::Discard, &t), "skips a rank");
    }

    #[test]
    fn stock_discard_and_own_pile_are_never_targets() {
        let stock = Pile::new(PileId::Stock);
        let discard = Pile::new(PileId::Discard);
        let own = Pile::new(PileId::Tableau(3));
        let king = Card::new(Suit::Clubs, Rank::King);

        assert!(!is_legal(king, PileId::Tableau(0), &stock));
        assert!(!is_legal(king, PileId::Tableau(0), &discard));
        assert!(!is_legal(king, PileId::Tableau(3), &own));
    }

    #[test]
    fn is_legal_is_pure_and_repeatable() {
        let f = pile_with(PileId::Foundation(0), &[Card::new(Suit::Hearts, Rank::Ace)]);
        let two = Card::new(Suit::Hearts, Rank::Two);

        let first = is_legal(two, PileId::Discard, &f);
        for _ in 0..10 {
            assert_eq!(is_legal(two, PileId::Discard, &f), first);
        }
        assert_eq!(f.len(), 1, "validation must not mutate the pile");
    }

    #[test]
    fn valid_and_invalid_runs() {
        use Rank::*;
        use Suit::*;

        // 8S, 7H, 6C is a valid run; appending 5C breaks the colors.
        let cards = [
            Card::new(Spades, Eight),
            Card::new(Hearts, Seven),
            Card::new(Clubs, Six),
            Card::new(Clubs, Five),
        ];

        assert!(is_valid_run(&cards[0..1]));
        assert!(is_valid_run(&cards[0..3]));
        assert!(!is_valid_run(&cards[0..4]));
        assert!(!is_valid_run(&[]));
    }
}
