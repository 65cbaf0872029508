//! The game engine: one live Klondike game and the intents that drive it.
//!
//! This module owns the only mutable state in the crate:
//!   - the 13 piles (stock, discard, 4 foundations, 7 tableaus)
//!   - the per-card arena: a face-up flag and a pile back-reference for
//!     each of the 52 cards, indexed by `Card::index()`
//!
//! A presentation layer issues intents (`draw_stock`, `try_move`,
//! `try_auto_play`, `new_game`) and re-renders from the query surface.
//! Every intent runs to completion before the next; observers never see
//! a half-applied mutation. Legality itself is decided by the pure
//! predicates in `crate::rules`.

use log::{debug, info};

use crate::card::{Card, CARDS_PER_DECK};
use crate::deck;
use crate::error::EngineError;
use crate::pile::{Pile, PileId, PileKind, FOUNDATION_IDS, NUM_FOUNDATIONS, NUM_TABLEAUS, TABLEAU_IDS};
use crate::rules;
use crate::stats::Stats;

/// Rank count a foundation must reach for the game to be won.
const FOUNDATION_COMPLETE: usize = 13;

/// Lifecycle of a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Cards are being laid out. Transient; external callers only see
    /// this if they catch a game mid-construction, which the
    /// single-threaded intent model rules out.
    Dealing,
    Playing,
    /// All four foundations are complete. Also transient: the engine
    /// deals a fresh game immediately after recording the win.
    Won,
}

/// Result of a `try_move` / `try_auto_play` intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied.
    Committed,
    /// The move was applied and completed all four foundations. The
    /// finished game has already been replaced by a fresh deal.
    CommittedAndWon,
    /// The validator rejected the move; nothing changed.
    Rejected,
}

/// Result of a `draw_stock` intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The stock's top card was turned onto the discard, face-up.
    Drawn(Card),
    /// The stock was empty: the discard (this many cards) was flipped
    /// face-down back into the stock in its original relative order.
    Recycled(usize),
    /// Stock and discard are both empty; nothing to do.
    NothingToDraw,
}

/// One live Klondike game plus session statistics.
///
/// Restart replaces the whole value (piles, arena, status) rather than
/// re-initializing in place, so no partially-reset state can leak out.
/// Only `Stats` survives across deals.
#[derive(Clone, Debug)]
pub struct Game {
    stock: Pile,
    discard: Pile,
    foundations: [Pile; NUM_FOUNDATIONS as usize],
    tableaus: [Pile; NUM_TABLEAUS as usize],
    /// Face state per card, indexed by `Card::index()`.
    face_up: [bool; CARDS_PER_DECK as usize],
    /// Current pile per card, indexed by `Card::index()`. The pile owns
    /// positional order; this is only a back-reference.
    pile_of: [PileId; CARDS_PER_DECK as usize],
    status: GameStatus,
    stats: Stats,
}

impl Game {
    /// Deal a new game from a freshly shuffled deck.
    pub fn new() -> Self {
        Game::dealt(deck::create_shuffled_deck(), Stats::default())
    }

    /// Deal a new game from a deterministic seed. Intended for tests,
    /// demos, and replays.
    pub fn from_seed(seed: u64) -> Self {
        Game::dealt(deck::shuffled_deck_from_seed(seed), Stats::default())
    }

    /// Deal a new game from an explicit deck order. The deck must be a
    /// permutation of the 52 cards; `crate::deck` produces those.
    pub fn with_deck(deck: [Card; CARDS_PER_DECK as usize]) -> Self {
        Game::dealt(deck, Stats::default())
    }

    /// Discard the current game entirely and deal a fresh one.
    /// Independent of win state; session statistics carry over.
    pub fn new_game(&mut self) {
        *self = Game::dealt(deck::create_shuffled_deck(), self.stats);
    }

    /// Build a completely fresh game from `deck`:
    /// tableau column *i* receives *i+1* cards, all face-down except the
    /// last dealt, which is flipped face-up (28 cards total); the
    /// remaining 24 go to the stock face-down.
    fn dealt(deck: [Card; CARDS_PER_DECK as usize], stats: Stats) -> Self {
        let mut game = Game {
            stock: Pile::new(PileId::Stock),
            discard: Pile::new(PileId::Discard),
            foundations: core::array::from_fn(|i| Pile::new(PileId::Foundation(i as u8))),
            tableaus: core::array::from_fn(|i| Pile::new(PileId::Tableau(i as u8))),
            face_up: [false; CARDS_PER_DECK as usize],
            pile_of: [PileId::Stock; CARDS_PER_DECK as usize],
            status: GameStatus::Dealing,
            stats,
        };

        let mut next = 0usize;
        for (col, &id) in TABLEAU_IDS.iter().enumerate() {
            for row in 0..=col {
                let card = deck[next];
                next += 1;
                game.tableaus[col].add_card(card);
                game.pile_of[card.index() as usize] = id;
                game.face_up[card.index() as usize] = row == col;
            }
        }
        debug_assert_eq!(next, 28);

        for &card in &deck[next..] {
            game.stock.add_card(card);
            game.pile_of[card.index() as usize] = PileId::Stock;
        }

        game.status = GameStatus::Playing;
        game.stats.record_deal();
        debug!("dealt a new game ({} cards in stock)", game.stock.len());
        game
    }

    // ----- Intents -----

    /// Turn the stock's top card onto the discard, face-up. When the
    /// stock is exhausted this recycles the discard back into the stock
    /// instead; when both piles are empty it does nothing.
    pub fn draw_stock(&mut self) -> DrawOutcome {
        if let Some(card) = self.stock.pop_top() {
            let idx = card.index() as usize;
            self.discard.add_card(card);
            self.pile_of[idx] = PileId::Discard;
            self.face_up[idx] = true;
            debug!("placed {card} on the discard");
            return DrawOutcome::Drawn(card);
        }

        if self.discard.is_empty() {
            return DrawOutcome::NothingToDraw;
        }

        // Recycle: walk the discard bottom-to-top into the stock, flip
        // everything face-down, then reverse so the next draw resumes
        // the original stock sequence.
        let n = self.discard.len();
        for &card in self.discard.cards() {
            let idx = card.index() as usize;
            self.stock.add_card(card);
            self.pile_of[idx] = PileId::Stock;
            self.face_up[idx] = false;
        }
        self.discard.clear();
        self.stock.reverse_order();
        self.stats.record_recycle();
        info!("stock refilled from the discard ({n} cards)");
        DrawOutcome::Recycled(n)
    }

    /// Try to move `card` (and, from a tableau, every card stacked above
    /// it as a unit) onto the pile named by `dest`.
    ///
    /// Illegal moves are rejected silently: the outcome says so and the
    /// game is unchanged. `Err` only signals a caller/engine desync.
    pub fn try_move(&mut self, card: Card, dest: PileId) -> Result<MoveOutcome, EngineError> {
        let source = self.card_pile(card);
        let is_top = self.pile(source).top_card() == Some(card);

        // Stock cards are never movable, and only a tableau card may be
        // dragged out from under other cards.
        if source.kind() == PileKind::Stock || !self.is_face_up(card) {
            return Ok(MoveOutcome::Rejected);
        }
        if source.kind() != PileKind::Tableau && !is_top {
            return Ok(MoveOutcome::Rejected);
        }
        // Foundations accept exactly one card at a time.
        if dest.kind() == PileKind::Foundation && !is_top {
            return Ok(MoveOutcome::Rejected);
        }
        if !rules::is_legal(card, source, self.pile(dest)) {
            return Ok(MoveOutcome::Rejected);
        }

        let unit = self.detach_unit(card, source)?;
        Ok(self.commit(unit, source, dest))
    }

    /// Double-activation shortcut: send `card` to the first foundation
    /// that will take it, scanning in `FOUNDATION_IDS` order. At most
    /// one placement happens per call. The card must be face-up, outside
    /// the stock, and on top of its pile.
    pub fn try_auto_play(&mut self, card: Card) -> Result<MoveOutcome, EngineError> {
        let source = self.card_pile(card);
        if source.kind() == PileKind::Stock || !self.is_face_up(card) {
            return Ok(MoveOutcome::Rejected);
        }
        if self.pile(source).top_card() != Some(card) {
            return Ok(MoveOutcome::Rejected);
        }

        for id in FOUNDATION_IDS {
            if rules::is_legal(card, source, self.pile(id)) {
                let unit = self.detach_unit(card, source)?;
                return Ok(self.commit(unit, source, id));
            }
        }
        Ok(MoveOutcome::Rejected)
    }

    // ----- Queries -----

    /// True iff every foundation holds its complete Ace..King run.
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(|f| f.len() == FOUNDATION_COMPLETE)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Borrow the pile with the given id.
    ///
    /// # Panics
    ///
    /// Panics if a `Foundation`/`Tableau` payload is out of range.
    pub fn pile(&self, id: PileId) -> &Pile {
        match id {
            PileId::Stock => &self.stock,
            PileId::Discard => &self.discard,
            PileId::Foundation(i) => &self.foundations[i as usize],
            PileId::Tableau(i) => &self.tableaus[i as usize],
        }
    }

    /// The pile a card currently sits in.
    #[inline]
    pub fn card_pile(&self, card: Card) -> PileId {
        self.pile_of[card.index() as usize]
    }

    /// Whether a card is currently face-up.
    #[inline]
    pub fn is_face_up(&self, card: Card) -> bool {
        self.face_up[card.index() as usize]
    }

    /// A pile's cards from top to bottom, each with its face state.
    pub fn cards_top_down(&self, id: PileId) -> impl Iterator<Item = (Card, bool)> + '_ {
        self.pile(id)
            .cards()
            .iter()
            .rev()
            .map(|&c| (c, self.is_face_up(c)))
    }

    // ----- Internals -----

    fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        match id {
            PileId::Stock => &mut self.stock,
            PileId::Discard => &mut self.discard,
            PileId::Foundation(i) => &mut self.foundations[i as usize],
            PileId::Tableau(i) => &mut self.tableaus[i as usize],
        }
    }

    /// Detach the cards that move as one unit: from a tableau, the
    /// suffix starting at `card` (all face-up by invariant); from any
    /// other pile, just `card` itself.
    fn detach_unit(&mut self, card: Card, source: PileId) -> Result<Vec<Card>, EngineError> {
        let src = self.pile_mut(source);
        let start = src
            .position_of(card)
            .ok_or(EngineError::CardNotFound { card, pile: source })?;
        if source.kind() == PileKind::Tableau {
            Ok(src.take_from(start))
        } else {
            src.remove_card(card)?;
            Ok(vec![card])
        }
    }

    /// Land a detached unit on `dest`, reveal whatever the departure
    /// exposed, and run the post-commit win check.
    fn commit(&mut self, unit: Vec<Card>, source: PileId, dest: PileId) -> MoveOutcome {
        if let Some(&first) = unit.first() {
            debug!("placed {first} (+{} more) on {dest:?}", unit.len() - 1);
        }
        for &card in &unit {
            let idx = card.index() as usize;
            self.pile_mut(dest).add_card(card);
            self.pile_of[idx] = dest;
            self.face_up[idx] = true;
        }
        self.reveal_exposed(source);
        self.stats.record_move();

        if self.is_won() {
            self.status = GameStatus::Won;
            self.stats.record_win();
            info!("game won; dealing a fresh one");
            *self = Game::dealt(deck::create_shuffled_deck(), self.stats);
            MoveOutcome::CommittedAndWon
        } else {
            MoveOutcome::Committed
        }
    }

    /// After a departure from a tableau pile, flip the newly exposed
    /// top card face-up if it was hidden.
    fn reveal_exposed(&mut self, source: PileId) {
        if source.kind() != PileKind::Tableau {
            return;
        }
        if let Some(top) = self.pile(source).top_card() {
            let idx = top.index() as usize;
            if !self.face_up[idx] {
                self.face_up[idx] = true;
                debug!("revealed {top} on {source:?}");
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
