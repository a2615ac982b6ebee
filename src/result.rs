//! Turn result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// How a turn ended, and therefore who acts next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// The other player takes the next turn.
    Next,
    /// The same player goes again.
    ExtraTurn,
    /// The player completed their last book and won the game.
    Won,
}

/// Something that happened during a turn, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// The player had no cards and drew one before asking.
    DrewIntoEmptyHand(Card),
    /// The player had no cards and the deck was empty, so the turn passed.
    Passed,
    /// The player's rank source had no rank to offer.
    NoRank,
    /// The player asked the opponent for a rank.
    Asked(Rank),
    /// The opponent held the requested rank.
    Hit {
        /// The requested rank.
        rank: Rank,
        /// Cards taken from the opponent.
        taken: Vec<Card>,
        /// Cards of the same rank the player already held.
        held: Vec<Card>,
    },
    /// The opponent held none of the requested rank.
    GoFish(Rank),
    /// The player drew a card that was not the requested rank.
    Drew(Card),
    /// The player drew the rank they asked for.
    DrewRequested(Card),
    /// The player had to go fish but the deck was empty.
    DeckEmpty,
    /// The player completed a book.
    Book(Rank),
}

/// The outcome of one turn together with its narration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct TurnReport {
    /// How the turn ended.
    pub result: TurnResult,
    /// Name of the player who took the turn.
    pub player: String,
    /// Name of the player who was asked.
    pub opponent: String,
    /// What happened, in order.
    pub events: Vec<TurnEvent>,
}

impl TurnReport {
    /// Returns the books completed during the turn.
    pub fn books(&self) -> impl Iterator<Item = Rank> + '_ {
        self.events.iter().filter_map(|event| match event {
            TurnEvent::Book(rank) => Some(*rank),
            _ => None,
        })
    }
}
