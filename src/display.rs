//! Human-readable rendering of a game.
//!
//! Renders a `Game` as multi-line text using the compact `Card`
//! representation. Face-down cards are shown as "XX" and face-up cards
//! with their `short_str()` rank/suit code. Useful for debugging, for
//! logging, and as the entire view layer of a terminal front end.

use crate::card::Card;
use crate::game::Game;
use crate::pile::{PileId, FOUNDATION_IDS, TABLEAU_IDS};

/// Format a single card for display, either face-up or face-down.
pub fn format_card_visible(card: Card, face_up: bool) -> String {
    if face_up {
        card.short_str()
    } else {
        "XX".to_string()
    }
}

/// Render the foundation row, top card only per pile:
/// empty as `[  ]`, otherwise e.g. `[AH]`, `[7C]`, `[KD]`.
pub fn render_foundations(game: &Game) -> String {
    let mut s = String::new();
    s.push_str("Foundations: ");
    for id in FOUNDATION_IDS {
        match game.pile(id).top_card() {
            None => s.push_str("[  ] "),
            Some(top) => {
                s.push('[');
                s.push_str(&top.short_str());
                s.push_str("] ");
            }
        }
    }
    s.trim_end().to_string()
}

/// Render the stock and discard piles on a single line.
///
/// The stock never reveals its order, only a count. The discard shows
/// its top card and size.
pub fn render_stock_and_discard(game: &Game) -> String {
    let mut s = String::new();

    let stock_len = game.pile(PileId::Stock).len();
    if stock_len == 0 {
        s.push_str("Stock: [empty]");
    } else {
        s.push_str(&format!("Stock: [{stock_len} cards]"));
    }

    s.push_str("    ");

    let discard = game.pile(PileId::Discard);
    match discard.top_card() {
        None => s.push_str("Discard: [empty]"),
        Some(top) => {
            s.push_str(&format!(
                "Discard: [{}] ({} cards)",
                top.short_str(),
                discard.len()
            ));
        }
    }

    s
}

/// Render the seven tableau columns as rows, bottom of each column
/// first, one line per column.
pub fn render_tableau(game: &Game) -> String {
    let mut s = String::new();
    for (col, &id) in TABLEAU_IDS.iter().enumerate() {
        s.push_str(&format!("T{}:", col + 1));
        for &card in game.pile(id).cards() {
            s.push(' ');
            s.push_str(&format_card_visible(card, game.is_face_up(card)));
        }
        s.push('\n');
    }
    s
}

/// Render the whole game: foundations, stock/discard, tableau.
pub fn render_game(game: &Game) -> String {
    format!(
        "{}\n{}\n{}",
        render_foundations(game),
        render_stock_and_discard(game),
        render_tableau(game)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn face_down_cards_render_as_xx() {
        let c = Card::new(Suit::Hearts, Rank::Ace);
        assert_eq!(format_card_visible(c, true), "AH");
        assert_eq!(format_card_visible(c, false), "XX");
    }

    #[test]
    fn fresh_game_renders_consistently() {
        let game = Game::from_seed(42);

        assert_eq!(render_foundations(&game), "Foundations: [  ] [  ] [  ] [  ]");
        assert_eq!(
            render_stock_and_discard(&game),
            "Stock: [24 cards]    Discard: [empty]"
        );

        let tableau = render_tableau(&game);
        assert_eq!(tableau.lines().count(), 7);
        // Column 7 has six hidden cards and one visible.
        let last = tableau.lines().last().unwrap();
        assert_eq!(last.matches("XX").count(), 6);

        let full = render_game(&game);
        assert!(full.contains("Foundations:"));
        assert!(full.contains("Stock:"));
    }
}
