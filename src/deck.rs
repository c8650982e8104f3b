//! The 52-card deck and its deal cursor.

use core::fmt;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A single 52-card deck dealt sequentially from a cursor.
///
/// The deck is allocated once and reused: shuffling permutes the cards in
/// place and rewinds the cursor, it never regenerates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in dealing order.
    cards: [Card; DECK_SIZE],
    /// Index of the next card to deal (`DECK_SIZE` when exhausted).
    cursor: usize,
}

impl Deck {
    /// Creates a deck in canonical order.
    ///
    /// # Example
    ///
    /// ```
    /// use bjconsole::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.remaining(), 52);
    /// assert_eq!(deck.cards()[0].to_string(), "2C");
    /// assert_eq!(deck.cards()[51].to_string(), "AS");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self {
            cards: [Card::new(Rank::Two, Suit::Clubs); DECK_SIZE],
            cursor: 0,
        };
        deck.initialize();
        deck
    }

    /// Creates a deck whose first cards are `top`, followed by every other
    /// card in canonical order.
    ///
    /// Useful for replaying a known sequence of deals.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if `top` lists a card twice.
    pub fn stacked(top: &[Card]) -> Result<Self, DeckError> {
        for (index, card) in top.iter().enumerate() {
            if top[..index].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        let rest = canonical_order().filter(|card| !top.contains(card));
        let mut deck = Self::new();
        for (slot, card) in deck.cards.iter_mut().zip(top.iter().copied().chain(rest)) {
            *slot = card;
        }
        Ok(deck)
    }

    /// Repopulates the deck in canonical order (suit-major, rank-minor) and
    /// rewinds the cursor.
    pub fn initialize(&mut self) {
        for (slot, card) in self.cards.iter_mut().zip(canonical_order()) {
            *slot = card;
        }
        self.cursor = 0;
    }

    /// Shuffles the deck in place and rewinds the cursor.
    ///
    /// Every position is swapped with a partner drawn from the whole deck
    /// rather than from the not-yet-shuffled tail. Unlike Fisher–Yates this
    /// does not make all permutations equally likely; the bias is accepted
    /// for casual play.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for position in 0..DECK_SIZE {
            let partner = rng.random_range(0..DECK_SIZE);
            self.cards.swap(position, partner);
        }
        self.cursor = 0;

        log::trace!("shuffled deck: {self}");
    }

    /// Deals the card under the cursor and advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] once all 52 cards have been dealt.
    pub fn deal_card(&mut self) -> Result<Card, DeckError> {
        let card = *self.cards.get(self.cursor).ok_or(DeckError::Exhausted)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Returns the index of the next card to deal.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        DECK_SIZE - self.cursor
    }

    /// Returns all cards in dealing order, dealt or not.
    #[must_use]
    pub const fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    /// Returns the cards dealt since the last shuffle.
    #[must_use]
    pub fn dealt(&self) -> &[Card] {
        &self.cards[..self.cursor]
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

fn canonical_order() -> impl Iterator<Item = Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
}
