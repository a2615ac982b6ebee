//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

use crate::card::{Card, Rank};

/// Errors that can occur while dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck cannot supply the requested number of cards.
    #[error("deck exhausted: requested {requested} cards, {remaining} remaining")]
    DeckExhausted {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
    /// The card has already been dealt.
    #[error("card {0} is not in the deck")]
    CardNotInDeck(Card),
}

/// Errors that can occur when recording a completed book.
///
/// Either variant means the caller broke the book invariants; the turn engine
/// treats them as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookError {
    /// The player already holds a book of this rank.
    #[error("book of {0} already completed")]
    Duplicate(Rank),
    /// The player already holds every book needed to win.
    #[error("book list is full")]
    Full,
}

/// Errors that can occur when resolving a turn through [`crate::Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// A player has already won this game.
    #[error("game is over")]
    GameOver,
}

/// Error returned when text does not name a rank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid rank '{0}'")]
pub struct ParseRankError(pub String);
