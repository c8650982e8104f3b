use rand::Rng;

use crate::error::DealError;

use super::{Game, GameState};

/// Cards dealt before the player's first decision: one to the dealer, two to
/// the player.
const INITIAL_CARDS: usize = 3;

impl<R: Rng> Game<R> {
    /// Deals one card to the dealer, then two to the player.
    ///
    /// Totals accumulate in dealing order. On success the game moves to the
    /// `PlayerTurn` state.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealing state or the deck holds
    /// fewer than three cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.cards_remaining() < INITIAL_CARDS {
            log::warn!(
                "cannot deal: {} cards left, {INITIAL_CARDS} needed",
                self.cards_remaining()
            );
            return Err(DealError::NotEnoughCards);
        }

        let card = self.draw().ok_or(DealError::NotEnoughCards)?;
        self.dealer_hand.add_card(card);
        log::debug!("dealer dealt {card}, total {}", self.dealer_hand.value());

        for _ in 0..2 {
            let card = self.draw().ok_or(DealError::NotEnoughCards)?;
            self.player_hand.add_card(card);
            log::debug!("player dealt {card}, total {}", self.player_hand.value());
        }

        self.state = GameState::PlayerTurn;
        Ok(())
    }
}
