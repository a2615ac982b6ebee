//! The 52-card deck.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// A standard deck of 52 distinct cards.
///
/// The undealt cards occupy the prefix `cards[..remaining]`; the top of the
/// deck is the highest remaining slot. Dealt cards stay in the array past the
/// prefix and are never handed out again.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    remaining: usize,
}

impl Deck {
    /// Creates an unshuffled deck, hearts first, each suit from two to ace.
    #[must_use]
    pub fn new() -> Self {
        let cards = core::array::from_fn(|i| {
            Card::new(Rank::ALL[i % Rank::ALL.len()], Suit::ALL[i / Rank::ALL.len()])
        });
        Self {
            cards,
            remaining: DECK_SIZE,
        }
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards[..self.remaining].shuffle(rng);
        log::trace!("shuffled {} cards", self.remaining);
    }

    /// Deals the top card, or `None` when the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let card = self.cards[self.remaining];
        log::trace!("dealt {card}, {} remaining", self.remaining);
        Some(card)
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Returns the undealt cards, bottom first.
    #[must_use]
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[..self.remaining]
    }

    /// Reorders the undealt cards so that `top` is dealt next, in order.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::CardNotInDeck`] if a card was already dealt or is
    /// named twice. The deck is left untouched in that case.
    pub fn stack(&mut self, top: &[Card]) -> Result<(), DealError> {
        for (index, card) in top.iter().enumerate() {
            if top[..index].contains(card) || !self.remaining_cards().contains(card) {
                return Err(DealError::CardNotInDeck(*card));
            }
        }

        for (offset, card) in top.iter().enumerate() {
            let target = self.remaining - 1 - offset;
            if let Some(position) = self.cards[..=target].iter().position(|c| c == card) {
                self.cards.swap(position, target);
            }
        }
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
