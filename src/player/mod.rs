//! Players and the capabilities they use to choose a rank.

use core::fmt;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use rand::RngCore;

use crate::card::{BOOKS_TO_WIN, Rank};
use crate::deck::Deck;
use crate::error::{BookError, DealError};
use crate::hand::Hand;

mod computer;
#[cfg(feature = "std")]
mod console;

pub use computer::Computer;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use console::Console;

/// Something that decides which rank a player asks for.
///
/// Implementations only see the asking player's own hand. Returning `None`
/// means no rank can be selected, which the turn engine treats as a passed
/// turn.
pub trait RankSource {
    /// Chooses the rank to request from the opponent.
    fn request_rank(&mut self, hand: &Hand, rng: &mut dyn RngCore) -> Option<Rank>;
}

/// A Go Fish player: a name, a hand, completed books, and a rank source.
pub struct Player {
    name: String,
    human: bool,
    hand: Hand,
    books: Vec<Rank>,
    source: Box<dyn RankSource>,
}

impl Player {
    /// Creates a player with an empty hand and no books.
    ///
    /// `human` marks whose cards may be shown when rendering the table.
    pub fn new(name: impl Into<String>, human: bool, source: impl RankSource + 'static) -> Self {
        Self {
            name: name.into(),
            human,
            hand: Hand::new(),
            books: Vec::with_capacity(BOOKS_TO_WIN),
            source: Box::new(source),
        }
    }

    /// Creates a computer player that asks for a random rank from its hand.
    pub fn computer(name: impl Into<String>) -> Self {
        Self::new(name, false, Computer)
    }

    /// Draws `count` cards from the deck into this player's hand.
    ///
    /// The deal is all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] if the deck holds fewer than
    /// `count` cards. Neither the deck nor the hand changes in that case.
    pub fn deal_cards(&mut self, deck: &mut Deck, count: usize) -> Result<(), DealError> {
        let remaining = deck.remaining();
        if remaining < count {
            return Err(DealError::DeckExhausted {
                requested: count,
                remaining,
            });
        }

        for card in core::iter::from_fn(|| deck.deal()).take(count) {
            self.hand.add_card(card);
        }
        log::trace!("{} was dealt {count} cards", self.name);
        Ok(())
    }

    /// Asks this player's rank source for the rank to request.
    pub fn request_rank(&mut self, rng: &mut dyn RngCore) -> Option<Rank> {
        self.source.request_rank(&self.hand, rng)
    }

    /// Records a completed book of `rank`.
    ///
    /// Returns whether the player now holds every book needed to win.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::Duplicate`] if the rank is already booked, or
    /// [`BookError::Full`] if no more books can be recorded.
    pub fn add_book(&mut self, rank: Rank) -> Result<bool, BookError> {
        if self.books.contains(&rank) {
            return Err(BookError::Duplicate(rank));
        }
        if self.books.len() >= BOOKS_TO_WIN {
            return Err(BookError::Full);
        }
        self.books.push(rank);
        Ok(self.has_won())
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the player is controlled by a person.
    #[must_use]
    pub const fn is_human(&self) -> bool {
        self.human
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the player's hand mutably.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the completed books, in completion order.
    #[must_use]
    pub fn books(&self) -> &[Rank] {
        &self.books
    }

    /// Returns whether the player holds every book needed to win.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.books.len() == BOOKS_TO_WIN
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("human", &self.human)
            .field("hand", &self.hand)
            .field("books", &self.books)
            .finish_non_exhaustive()
    }
}
