//! Round controller and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ReshuffleError;
use crate::hand::Hand;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use state::GameState;

/// A single-player blackjack table.
///
/// The game owns the deck, the random source used to shuffle it, and both
/// hands. The deck is created once and reshuffled at the start of every round.
/// A round runs through [`deal`](Self::deal), any number of
/// [`hit`](Self::hit)s, [`stand`](Self::stand),
/// [`dealer_play`](Self::dealer_play) and [`showdown`](Self::showdown).
///
/// The random source defaults to a seeded [`ChaCha8Rng`]; any [`Rng`] can be
/// supplied with [`Game::with_rng`].
#[derive(Debug)]
pub struct Game<R = ChaCha8Rng> {
    /// The deck. Replace it between [`start_round`](Self::start_round) and
    /// [`deal`](Self::deal) to play a known sequence of cards.
    pub deck: Deck,
    /// Current round state.
    state: GameState,
    /// Player's hand.
    player_hand: Hand,
    /// Dealer's hand.
    dealer_hand: Hand,
    /// Cards the dealer drew during the dealer turn.
    dealer_draws: usize,
    /// Number of rounds started on this table.
    rounds_started: u32,
    /// Random source for shuffling.
    rng: R,
}

impl Game {
    /// Creates a new game whose shuffles are driven by `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjconsole::{Game, GameState};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.state(), GameState::Waiting);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new game that shuffles with the given random source.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            deck: Deck::new(),
            state: GameState::Waiting,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            dealer_draws: 0,
            rounds_started: 0,
            rng,
        }
    }

    /// Reshuffles the deck and rewinds its cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress (not in `Waiting` or
    /// `Resolved` state).
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if !self.state.is_idle() {
            return Err(ReshuffleError::InvalidState);
        }

        self.deck.shuffle(&mut self.rng);
        log::info!("deck reshuffled");
        Ok(())
    }

    /// Starts a new round: reshuffles the deck, clears both hands and moves
    /// to the `Dealing` state.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress.
    pub fn start_round(&mut self) -> Result<(), ReshuffleError> {
        self.reshuffle()?;

        self.player_hand.clear();
        self.dealer_hand.clear();
        self.dealer_draws = 0;
        self.rounds_started += 1;
        self.state = GameState::Dealing;

        log::info!("round {} started", self.rounds_started);
        Ok(())
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Option<Card> {
        match self.deck.deal_card() {
            Ok(card) => Some(card),
            Err(err) => {
                log::warn!("{err} (round {}, {:?})", self.rounds_started, self.state);
                None
            }
        }
    }

    /// Returns the current round state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the number of cards left to deal.
    pub const fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the number of rounds started on this table.
    pub const fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Clears both hands and returns the game to the `Waiting` state.
    ///
    /// The deck is left as is; it is reshuffled by the next
    /// [`start_round`](Self::start_round).
    pub fn clear_round(&mut self) {
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.dealer_draws = 0;
        self.state = GameState::Waiting;
    }
}
