use rand::RngCore;
use rand::seq::IndexedRandom;

use crate::card::Rank;
use crate::hand::Hand;

use super::RankSource;

/// Computer policy: asks for the rank of a uniformly chosen card in its hand.
///
/// Ranks held in multiples are proportionally more likely to be asked for.
#[derive(Debug, Clone, Copy, Default)]
pub struct Computer;

impl RankSource for Computer {
    fn request_rank(&mut self, hand: &Hand, rng: &mut dyn RngCore) -> Option<Rank> {
        hand.cards().choose(rng).map(|card| card.rank)
    }
}
