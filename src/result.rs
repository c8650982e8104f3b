//! Round result types for showdown.

/// Outcome of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins.
    Win,
    /// Player loses.
    Lose,
}

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Player went over 21; the dealer never played.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player finished above the dealer.
    PlayerHigher,
    /// Both finished on the same total. Ties go to the player.
    Tie,
    /// Dealer finished above the player.
    DealerHigher,
}

impl Resolution {
    /// Decides a round from the final totals.
    #[must_use]
    pub const fn from_totals(player_value: u8, dealer_value: u8) -> Self {
        if player_value > crate::hand::BLACKJACK {
            Self::PlayerBust
        } else if dealer_value > crate::hand::BLACKJACK {
            Self::DealerBust
        } else if player_value > dealer_value {
            Self::PlayerHigher
        } else if player_value == dealer_value {
            Self::Tie
        } else {
            Self::DealerHigher
        }
    }

    /// Returns the player's outcome for this resolution.
    #[must_use]
    pub const fn outcome(self) -> Outcome {
        match self {
            Self::DealerBust | Self::PlayerHigher | Self::Tie => Outcome::Win,
            Self::PlayerBust | Self::DealerHigher => Outcome::Lose,
        }
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Whether the player won.
    pub outcome: Outcome,
    /// How the round was decided.
    pub resolution: Resolution,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Number of cards the dealer drew after the player stood.
    pub dealer_draws: usize,
}

impl RoundResult {
    /// Returns whether the player won.
    #[must_use]
    pub const fn player_won(&self) -> bool {
        matches!(self.outcome, Outcome::Win)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_order() {
        assert_eq!(Resolution::from_totals(22, 17), Resolution::PlayerBust);
        // A player bust is decided before the dealer's total matters.
        assert_eq!(Resolution::from_totals(25, 23), Resolution::PlayerBust);
        assert_eq!(Resolution::from_totals(17, 23), Resolution::DealerBust);
        assert_eq!(Resolution::from_totals(20, 19), Resolution::PlayerHigher);
        assert_eq!(Resolution::from_totals(18, 18), Resolution::Tie);
        assert_eq!(Resolution::from_totals(16, 17), Resolution::DealerHigher);
    }

    #[test]
    fn ties_go_to_the_player() {
        assert_eq!(Resolution::Tie.outcome(), Outcome::Win);
        assert_eq!(Resolution::DealerHigher.outcome(), Outcome::Lose);
        assert_eq!(Resolution::PlayerBust.outcome(), Outcome::Lose);
    }
}
