//! A player's hand.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// The cards held by one player, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns how many cards of `rank` the hand holds.
    #[must_use]
    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|card| card.rank == rank).count()
    }

    /// Returns whether the hand holds at least one card of `rank`.
    #[must_use]
    pub fn has_rank(&self, rank: Rank) -> bool {
        self.cards.iter().any(|card| card.rank == rank)
    }

    /// Removes and returns every card of `rank`, in insertion order.
    ///
    /// Returns an empty vector when nothing matches.
    pub fn extract_all(&mut self, rank: Rank) -> Vec<Card> {
        let (taken, kept) = core::mem::take(&mut self.cards)
            .into_iter()
            .partition(|card| card.rank == rank);
        self.cards = kept;
        taken
    }

    /// Returns the distinct ranks held, in the order first received.
    #[must_use]
    pub fn ranks(&self) -> Vec<Rank> {
        let mut ranks = Vec::new();
        for card in &self.cards {
            if !ranks.contains(&card.rank) {
                ranks.push(card.rank);
            }
        }
        ranks
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
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
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
