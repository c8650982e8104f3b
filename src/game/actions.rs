use rand::Rng;

use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

impl<R: Rng> Game<R> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the card takes the player over 21 the round ends immediately as a
    /// loss and the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck is
    /// empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw().ok_or(ActionError::NoCards)?;
        self.player_hand.add_card(card);
        log::debug!("player hits {card}, total {}", self.player_hand.value());

        if self.player_hand.is_bust() {
            log::info!("player busts on {}", self.player_hand.value());
            self.state = GameState::Resolved;
        }

        Ok(card)
    }

    /// Player action: Stand (end the turn and let the dealer play).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        log::debug!("player stands on {}", self.player_hand.value());
        self.state = GameState::DealerTurn;
        Ok(())
    }
}
