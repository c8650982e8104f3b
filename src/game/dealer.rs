use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{Resolution, RoundResult};

use super::{Game, GameState};

/// The dealer keeps drawing while below this total.
pub const DEALER_STANDS_ON: u8 = 17;

impl<R: Rng> Game<R> {
    /// Dealer plays their hand: draws until reaching 17 or more.
    ///
    /// There is no soft-17 distinction; an Ace is valued once when drawn.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck is
    /// empty while the dealer must draw. On error the dealer hand is left as
    /// it was.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        // The dealer hand is only replaced once every draw has succeeded.
        let mut hand = self.dealer_hand.clone();
        let mut drawn_cards = Vec::new();
        while hand.value() < DEALER_STANDS_ON {
            let card = self.draw().ok_or(ShowdownError::NoCards)?;
            hand.add_card(card);
            log::debug!("dealer draws {card}, total {}", hand.value());
            drawn_cards.push(card);
        }

        self.dealer_draws += drawn_cards.len();
        self.dealer_hand = hand;
        self.state = GameState::Resolved;
        Ok(drawn_cards)
    }

    /// Decides the round.
    ///
    /// A player bust loses outright. Otherwise a dealer bust wins, and if
    /// neither busted the player wins on a total at least equal to the
    /// dealer's.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not resolved yet.
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Resolved {
            return Err(ShowdownError::InvalidState);
        }

        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();
        let resolution = Resolution::from_totals(player_value, dealer_value);
        let result = RoundResult {
            outcome: resolution.outcome(),
            resolution,
            player_value,
            dealer_value,
            dealer_draws: self.dealer_draws,
        };

        log::info!(
            "round {} resolved: {:?} ({:?}, player {player_value}, dealer {dealer_value})",
            self.rounds_started,
            result.outcome,
            resolution
        );
        Ok(result)
    }
}
