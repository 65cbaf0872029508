//! Per-session counters maintained by the engine.

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Deals performed, including the automatic re-deal after a win.
    pub games_dealt: u64,
    /// Games finished with all four foundations complete.
    pub games_won: u64,
    /// Moves committed across all games this session.
    pub moves_committed: u64,
    /// Times the discard was recycled back into the stock.
    pub recycles: u64,
}

impl Stats {
    pub fn record_deal(&mut self) {
        self.games_dealt += 1;
    }

    pub fn record_win(&mut self) {
        self.games_won += 1;
    }

    pub fn record_move(&mut self) {
        self.moves_committed += 1;
    }

    pub fn record_recycle(&mut self) {
        self.recycles += 1;
    }
}
