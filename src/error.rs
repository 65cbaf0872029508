//! Engine error taxonomy.
//!
//! Expected illegal plays are *not* errors: `try_move` and
//! `try_auto_play` report them through their outcome value and leave
//! the game unchanged. Errors are reserved for caller/engine desync.

use thiserror::Error;

use crate::card::Card;
use crate::pile::PileId;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The referenced card is not where the caller said it was.
    /// This indicates a programming error in the caller, not a
    /// recoverable game situation.
    #[error("card {card} not found in pile {pile:?}")]
    CardNotFound { card: Card, pile: PileId },
}
