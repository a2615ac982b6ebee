//! Resolution of a single turn.

use alloc::string::ToString;
use alloc::vec::Vec;

use rand::RngCore;

use crate::card::{BOOK_SIZE, Rank};
use crate::deck::Deck;
use crate::player::Player;
use crate::result::{TurnEvent, TurnReport, TurnResult};

/// Resolves one turn for `playing` against `other`.
///
/// 1. A player with an empty hand draws one card first; if the deck is empty
///    too, the turn passes.
/// 2. The player asks for a rank, and every card of that rank is pulled out
///    of both hands.
/// 3. If the opponent had none, the player goes fish. Drawing the requested
///    rank earns an extra turn. Drawing the fourth card of a rank already
///    held three times completes that book on the spot, before the requested
///    rank is checked.
/// 4. Exactly four cards of the requested rank make a book and earn an extra
///    turn; otherwise the cards go back into the player's hand.
///
/// Completing the last book ends the turn with [`TurnResult::Won`]
/// immediately. Cards of the requested rank still held out at that point go
/// back into the winner's hand.
///
/// # Panics
///
/// Panics if a book cannot be recorded, which means the book invariants were
/// already broken before the turn started.
pub fn play_turn(
    playing: &mut Player,
    other: &mut Player,
    deck: &mut Deck,
    rng: &mut dyn RngCore,
) -> TurnReport {
    let mut events = Vec::new();
    let result = resolve(playing, other, deck, rng, &mut events);
    TurnReport {
        result,
        player: playing.name().to_string(),
        opponent: other.name().to_string(),
        events,
    }
}

fn resolve(
    playing: &mut Player,
    other: &mut Player,
    deck: &mut Deck,
    rng: &mut dyn RngCore,
    events: &mut Vec<TurnEvent>,
) -> TurnResult {
    if playing.hand().is_empty() {
        let Some(card) = deck.deal() else {
            log::debug!("{} has no cards and the deck is empty", playing.name());
            events.push(TurnEvent::Passed);
            return TurnResult::Next;
        };
        log::debug!("{} has no cards, drew one", playing.name());
        playing.hand_mut().add_card(card);
        events.push(TurnEvent::DrewIntoEmptyHand(card));
    }

    let Some(desired) = playing.request_rank(rng) else {
        log::debug!("{} has no rank to ask for", playing.name());
        events.push(TurnEvent::NoRank);
        return TurnResult::Next;
    };
    log::debug!("{} asks {} for {desired}", playing.name(), other.name());
    events.push(TurnEvent::Asked(desired));

    let mut result = TurnResult::Next;
    let mut candidates = other.hand_mut().extract_all(desired);
    let taken = candidates.len();
    let held = playing.hand_mut().extract_all(desired);

    if taken > 0 {
        log::debug!("{} hands over {taken} {desired}", other.name());
        events.push(TurnEvent::Hit {
            rank: desired,
            taken: candidates.clone(),
            held: held.clone(),
        });
        candidates.extend(held);
    } else {
        candidates.extend(held);
        events.push(TurnEvent::GoFish(desired));

        match deck.deal() {
            Some(card) if card.rank == desired => {
                log::debug!("{} drew the requested {desired}", playing.name());
                candidates.push(card);
                result = TurnResult::ExtraTurn;
                events.push(TurnEvent::DrewRequested(card));
            }
            Some(card) if playing.hand().count_rank(card.rank) == BOOK_SIZE - 1 => {
                events.push(TurnEvent::Drew(card));
                let held = playing.hand_mut().extract_all(card.rank).len();
                assert!(
                    held == BOOK_SIZE - 1,
                    "{}: hand reported {} cards of {} but yielded {held}",
                    playing.name(),
                    BOOK_SIZE - 1,
                    card.rank,
                );
                if record_book(playing, card.rank, events) {
                    for card in candidates {
                        playing.hand_mut().add_card(card);
                    }
                    return TurnResult::Won;
                }
                result = TurnResult::ExtraTurn;
            }
            Some(card) => {
                events.push(TurnEvent::Drew(card));
                playing.hand_mut().add_card(card);
            }
            None => {
                log::debug!("{} cannot go fish, the deck is empty", playing.name());
                events.push(TurnEvent::DeckEmpty);
            }
        }
    }

    if candidates.len() == BOOK_SIZE {
        if record_book(playing, desired, events) {
            return TurnResult::Won;
        }
        result = TurnResult::ExtraTurn;
    } else {
        for card in candidates {
            playing.hand_mut().add_card(card);
        }
    }

    result
}

/// Records a book and returns whether it won the game.
fn record_book(player: &mut Player, rank: Rank, events: &mut Vec<TurnEvent>) -> bool {
    let won = player
        .add_book(rank)
        .unwrap_or_else(|err| panic!("{}: cannot record book of {rank}: {err}", player.name()));
    log::debug!(
        "{} completed the book of {rank} ({} total)",
        player.name(),
        player.books().len()
    );
    events.push(TurnEvent::Book(rank));
    won
}
