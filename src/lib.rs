//! A single-player console blackjack game with optional `no_std` support.
//!
//! The crate provides a [`Deck`] of 52 [`Card`]s dealt from a cursor, the
//! running-total [`Hand`] valuation, and a [`Game`] type that runs one round
//! at a time: initial deal, the player's hit/stand turn, the dealer drawing
//! to 17, and showdown. With the `std` feature the [`console`] module plays
//! whole sessions over any reader and writer.
//!
//! # Example
//!
//! ```
//! use bjconsole::{Game, GameState};
//!
//! let mut game = Game::new(42);
//! game.start_round().unwrap();
//! game.deal().unwrap();
//! game.stand().unwrap();
//! game.dealer_play().unwrap();
//!
//! assert_eq!(game.state(), GameState::Resolved);
//! let result = game.showdown().unwrap();
//! assert!(result.dealer_value >= 17);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckError, ParseCardError, ReshuffleError, ShowdownError};
pub use game::{DEALER_STANDS_ON, Game, GameState};
pub use hand::{BLACKJACK, Hand, value_of};
pub use result::{Outcome, Resolution, RoundResult};
