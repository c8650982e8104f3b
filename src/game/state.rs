//! Game state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round in progress.
    Waiting,
    /// Deck shuffled, initial cards not yet dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer draws to 17.
    DealerTurn,
    /// Round has ended and the result can be read.
    Resolved,
}

impl GameState {
    /// Returns whether no round is being played, so the deck may be shuffled.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Waiting | Self::Resolved)
    }
}
