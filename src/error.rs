//! Error types for deck and game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors raised by the deck itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Every card has already been dealt since the last shuffle.
    #[error("deck exhausted: all 52 cards have been dealt")]
    Exhausted,
    /// A stacked deck listed the same card twice.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur while parsing a two-character card code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The code was not exactly two characters.
    #[error("card code must be exactly two characters")]
    InvalidLength,
    /// Unknown rank character.
    #[error("unknown rank character {0:?}")]
    InvalidRank(char),
    /// Unknown suit character.
    #[error("unknown suit character {0:?}")]
    InvalidSuit(char),
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards left in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during dealer play and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// A round is in progress.
    #[error("cannot reshuffle while a round is in progress")]
    InvalidState,
}
