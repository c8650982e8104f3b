//! Hand valuation.

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Returns the points a card of `rank` adds to a hand whose total before the
/// card is `running_total`.
///
/// Number cards count their face value and ten-value cards count 10. An Ace
/// counts 11 unless that would take the hand past 21, in which case it counts
/// 1. The choice is made once, when the Ace is added; Aces already in the hand
/// are never revalued.
///
/// # Example
///
/// ```
/// use bjconsole::{Rank, value_of};
///
/// assert_eq!(value_of(Rank::Ace, 0), 11);
/// assert_eq!(value_of(Rank::Ace, 11), 1);
/// assert_eq!(value_of(Rank::King, 5), 10);
/// ```
#[must_use]
pub const fn value_of(rank: Rank, running_total: u8) -> u8 {
    match rank {
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        Rank::Ace => {
            if running_total > BLACKJACK - 11 {
                1
            } else {
                11
            }
        }
    }
}

/// Cards held by the player or the dealer, with their running total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the order they were dealt.
    cards: Vec<Card>,
    /// Sum of each card's value at the moment it was added.
    total: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
        }
    }

    /// Adds a card to the hand and returns the points it contributed.
    pub fn add_card(&mut self, card: Card) -> u8 {
        let points = card.value(self.total);
        self.total = self.total.saturating_add(points);
        self.cards.push(card);
        points
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the running total of the hand.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.total
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.total = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add_card(Card::new(rank, Suit::Hearts));
        }
        hand
    }

    #[test]
    fn number_and_face_values() {
        assert_eq!(value_of(Rank::Seven, 0), 7);
        assert_eq!(value_of(Rank::Two, 19), 2);
        assert_eq!(value_of(Rank::Ten, 0), 10);
        assert_eq!(value_of(Rank::Jack, 3), 10);
        assert_eq!(value_of(Rank::Queen, 20), 10);
        assert_eq!(value_of(Rank::King, 5), 10);
    }

    #[test]
    fn ace_counts_eleven_until_it_would_bust() {
        assert_eq!(value_of(Rank::Ace, 0), 11);
        assert_eq!(value_of(Rank::Ace, 10), 11);
        assert_eq!(value_of(Rank::Ace, 11), 1);
        assert_eq!(value_of(Rank::Ace, 20), 1);
    }

    #[test]
    fn two_aces_make_twelve() {
        let hand = hand_of(&[Rank::Ace, Rank::Ace]);
        assert_eq!(hand.value(), 12);
        assert!(!hand.is_bust());
    }

    #[test]
    fn aces_are_not_revalued_later() {
        // A(11) + 5 = 16, then a King busts: the first Ace stays at 11.
        let hand = hand_of(&[Rank::Ace, Rank::Five, Rank::King]);
        assert_eq!(hand.value(), 26);
        assert!(hand.is_bust());
    }

    #[test]
    fn add_card_reports_points() {
        let mut hand = Hand::new();
        assert_eq!(hand.add_card(Card::new(Rank::Nine, Suit::Clubs)), 9);
        assert_eq!(hand.add_card(Card::new(Rank::Ace, Suit::Clubs)), 11);
        assert_eq!(hand.add_card(Card::new(Rank::Ace, Suit::Spades)), 1);
        assert_eq!(hand.value(), 21);
        assert_eq!(hand.len(), 3);

        hand.clear();
        assert!(hand.is_empty());
        assert_eq!(hand.value(), 0);
    }
}
