//! A Klondike solitaire game-state engine.
//!
//! The crate covers the rules side of the game only: the pile/card data
//! model, move legality, automatic reveals, stock recycling, win
//! detection, and restart. Presentation concerns (hit-testing, drag
//! geometry, rendering beyond plain text) belong to whatever layer
//! drives the [`game::Game`] intent API:
//!
//! - [`Game::new_game`](game::Game::new_game) — discard and re-deal
//! - [`Game::draw_stock`](game::Game::draw_stock) — stock to discard,
//!   recycling when exhausted
//! - [`Game::try_move`](game::Game::try_move) — explicit card-to-pile
//!   move, validated by [`rules::is_legal`]
//! - [`Game::try_auto_play`](game::Game::try_auto_play) — send a card
//!   to the first foundation that takes it
//! - queries for piles, face state, and the win condition
//!
//! The engine is single-threaded and memory-resident; each game is
//! rebuilt from scratch, nothing is persisted.

pub mod card;
pub mod deck;
pub mod display;
pub mod error;
pub mod game;
pub mod pile;
pub mod rules;
pub mod stats;

pub use card::{Card, Color, Rank, Suit};
pub use error::EngineError;
pub use game::{DrawOutcome, Game, GameStatus, MoveOutcome};
pub use pile::{Pile, PileId, PileKind};
pub use stats::Stats;
