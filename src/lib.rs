//! A two-player Go Fish game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the deck, both players, and
//! the random generator, and resolves one turn at a time. The turn engine
//! itself is available as [`play_turn`] for callers that manage their own
//! players and deck.
//!
//! # Example
//!
//! ```no_run
//! use gofish::{Game, GameOptions, Player};
//!
//! let options = GameOptions::default();
//! let first = Player::computer("North");
//! let second = Player::computer("South");
//! let mut game = Game::new(options, 42, first, second).unwrap();
//! while game.winner().is_none() {
//!     game.play_turn().unwrap();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{BOOK_SIZE, BOOKS_TO_WIN, Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{BookError, DealError, ParseRankError, TurnError};
pub use game::{Game, GameState, play_turn};
pub use hand::Hand;
pub use options::GameOptions;
#[cfg(feature = "std")]
pub use player::Console;
pub use player::{Computer, Player, RankSource};
pub use result::{TurnEvent, TurnReport, TurnResult};
