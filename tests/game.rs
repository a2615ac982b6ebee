//! Turn engine and game session tests.

use gofish::{
    BOOKS_TO_WIN, Card, DECK_SIZE, DealError, Deck, Game, GameOptions, GameState, Hand, Player,
    Rank, RankSource, Suit, TurnError, TurnEvent, TurnResult, play_turn,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Always asks for the same rank.
struct Ask(Rank);

impl RankSource for Ask {
    fn request_rank(&mut self, _hand: &Hand, _rng: &mut dyn RngCore) -> Option<Rank> {
        Some(self.0)
    }
}

/// Never has anything to ask for.
struct Silent;

impl RankSource for Silent {
    fn request_rank(&mut self, _hand: &Hand, _rng: &mut dyn RngCore) -> Option<Rank> {
        None
    }
}

/// Deals the given hands from a fresh deck, leaving `draws` on top.
fn table(
    source: impl RankSource + 'static,
    playing_cards: &[Card],
    other_cards: &[Card],
    draws: &[Card],
) -> (Player, Player, Deck) {
    let mut deck = Deck::new();
    let top: Vec<Card> = playing_cards
        .iter()
        .chain(other_cards)
        .chain(draws)
        .copied()
        .collect();
    deck.stack(&top).unwrap();

    let mut playing = Player::new("Alice", true, source);
    let mut other = Player::computer("Bob");
    playing.deal_cards(&mut deck, playing_cards.len()).unwrap();
    other.deal_cards(&mut deck, other_cards.len()).unwrap();
    (playing, other, deck)
}

fn accounted(players: [&Player; 2], deck: &Deck) -> usize {
    deck.remaining()
        + players
            .iter()
            .map(|p| p.hand().len() + 4 * p.books().len())
            .sum::<usize>()
}

fn give_books(player: &mut Player, ranks: &[Rank]) {
    for &rank in ranks {
        assert!(!player.add_book(rank).unwrap());
    }
}

#[test]
fn hit_without_book_returns_cards_and_passes_turn() {
    let (mut alice, mut bob, mut deck) = table(
        Ask(Rank::Nine),
        &[
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Three, Suit::Hearts),
        ],
        &[card(Rank::Nine, Suit::Diamonds)],
        &[],
    );
    let remaining = deck.remaining();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let report = play_turn(&mut alice, &mut bob, &mut deck, &mut rng);

    assert_eq!(report.result, TurnResult::Next);
    assert_eq!(report.player, "Alice");
    assert_eq!(report.opponent, "Bob");
    assert_eq!(
        report.events,
        vec![
            TurnEvent::Asked(Rank::Nine),
            TurnEvent::Hit {
                rank: Rank::Nine,
                taken: vec![card(Rank::Nine, Suit::Diamonds)],
                held: vec![card(Rank::Nine, Suit::Clubs), card(Rank::Nine, Suit::Spades)],
            },
        ]
    );
    assert!(bob.hand().is_empty());
    assert_eq!(alice.hand().len(), 4);
    assert_eq!(alice.hand().count_rank(Rank::Nine), 3);
    assert!(alice.books().is_empty());
    assert_eq!(deck.remaining(), remaining);
    assert_eq!(accounted([&alice, &bob], &deck), DECK_SIZE);
}

#[test]
fn hit_completing_book_grants_extra_turn() {
    let (mut alice, mut bob, mut deck) = table(
        Ask(Rank::Nine),
        &[
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Three, Suit::Hearts),
        ],
        &[
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Two, Suit::Hearts),
        ],
        &[],
    );
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let report = play_turn(&mut alice, &mut bob, &mut deck, &mut rng);

    assert_eq!(report.result, TurnResult::ExtraTurn);
    assert_eq!(report.books().collect::<Vec<_>>(), vec![Rank::Nine]);
    assert_eq!(alice.books(), &[Rank::Nine]);
    assert_eq!(alice.hand().cards(), &[card(Rank::Three, Suit::Hearts)]);
    assert_eq!(bob.hand().cards(), &[card(Rank::Two, Suit::Hearts)]);
    assert_eq!(accounted([&alice, &bob], &deck), DECK_SIZE);
}

#[test]
fn go_fish_drawing_fourth_king_completes_book() {
    let (mut alice, mut bob, mut deck) = table(
        Ask(Rank::King),
        &[
            card(Rank::King, Suit::Clubs),
            card(Rank::King, Suit::Spades),
            card(Rank::King, Suit::Diamonds),
        ],
        &[card(Rank::Two, Suit::Hearts)],
        &[card(Rank::King, Suit::Hearts)],
    );
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let report = play_turn(&mut alice, &mut bob, &mut deck, &mut rng);

    assert_eq!(report.result, TurnResult::ExtraTurn);
    assert_eq!(
        report.events,
        vec![
            TurnEvent::Asked(Rank::King),
            TurnEvent::GoFish(Rank::King),
            TurnEvent::DrewRequested(card(Rank::King, Suit::Hearts)),
            TurnEvent::Book(Rank::King),
        ]
    );
    assert_eq!(alice.books(), &[Rank::King]);
    assert!(!alice.hand().has_rank(Rank::King));
    assert_eq!(accounted([&alice, &bob], &deck), DECK_SIZE);
}

#[test]
fn go_fish_book_with_six_prior_books_wins() {
    let (mut alice, mut bob, mut deck) = table(
        Ask(Rank::King),
        &[
            card(Rank::King, Suit::Clubs),
            card(Rank::King, Suit::Spades),
            card(Rank::King, Suit::Diamonds),
        ],
        &[card(Rank::Two, Suit::Hearts)],
        &[card(Rank::King, Suit::Hearts)],
    );
    give_books(
        &mut alice,
        &[
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
        ],
    );
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let report = play_turn(&mut alice, &mut bob, &mut deck, &mut rng);

    assert_eq!(report.result, TurnResult::Won);
    assert!(alice.has_won());
    assert_eq!(alice.books().len(), BOOKS_TO_WIN);
    assert_eq!(alice.books().last(), Some(&Rank::King));
}

#[test]
fn drawing_requested_rank_without_book_grants_extra_turn() {
    let (mut alice, mut bob, mut deck) = table(
        Ask(Rank::Four),
        &[card(Rank::Four, Suit::Hearts), card(Rank::Ten, Suit::Clubs)],
        &[card(Rank::Two, Suit::Hearts)],
        &[card(Rank::Four, Suit::Clubs)],
    );
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let report = play_turn(&mut alice, &mut bob, &mut deck, &mut rng);

    assert_eq!(report.result, TurnResult::ExtraTurn);
    assert_eq!(alice.hand().count_rank(Rank::Four), 2);
    assert_eq!(alice.hand().len(), 3);
    assert!(alice.books().is_empty());
    assert_eq!(accounted([&alice, &bob], &deck), DECK_SIZE);
}

#[test]
fn go_fish_miss_keeps_drawn_card_and_passes_turn() {
    let (mut alice, mut bob, mut deck) = table(
        Ask(Rank::Four),
        &[card(Rank::Four, Suit::Hearts)],
        &[card(Rank::Two, Suit::Hearts)],
        &[card(Rank::Eight, Suit::Clubs)],
    );
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let report = play_turn(&mut alice, &mut bob, &mut deck, &mut rng);

    assert_eq!(report.result, TurnResult::Next);
    assert_eq!(
        report.events.last(),
        Some(&TurnEvent::Drew(card(Rank::Eight, Suit::Clubs)))
    );
    assert!(alice.hand().has_rank(Rank::Four));
    assert!(alice.hand().has_rank(Rank::Eight));
    assert_eq!(alice.hand().len(), 2);
    assert_eq!(bob.hand().len(), 1);
    assert_eq!(accounted([&alice, &bob], &deck), DECK_SIZE);
}

#[test]
fn drawn_card_completing_other_rank_books_it_first() {
    let (mut alice, mut bob, mut deck) = table(
        Ask(Rank::Jack),
        &[
            card(Rank::Five, Suit::Hearts),
            card(Rank::Five, Suit::Clubs),
            card(Rank::Five, Suit::Diamonds),
            card(Rank::Jack, Suit::Spades),
        ],
        &[card(Rank::Two, Suit::Hearts)],
        &[card(Rank::Five, Suit::Spades)],
    );
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let report = play_turn(&mut alice, &mut bob, &mut deck, &mut rng);

    assert_eq!(report.result, TurnResult::ExtraTurn);
    assert_eq!(
        report.events,
        vec![
            TurnEvent::Asked(Rank::Jack),
            TurnEvent::GoFish(Rank::Jack),
            TurnEvent::Drew(card(Rank::Five, Suit::Spades)),
            TurnEvent::Book(Rank::Five),
        ]
    );
    assert_eq!(alice.books(), &[Rank::Five]);
    assert_eq!(alice.hand().cards(), &[card(Rank::Jack, Suit::Spades)]);
    assert_eq!(accounted([&alice, &bob], &deck), DECK_SIZE);
}

#[test]
fn incidental_last_book_wins_and_keeps_held_cards() {
    let (mut alice, mut bob, mut deck) = table(
        Ask(Rank::Jack),
        &[
            card(Rank::Five, Suit::Hearts),
            card(Rank::Five, Suit::Clubs),
            card(Rank::Five, Suit::Diamonds),
            card(Rank::Jack, Suit::Spades),
        ],
        &[card(Rank::Two, Suit::Hearts)],
        &[card(Rank::Five, Suit::Spades)],
    );
    give_books(
        &mut alice,
        &[
            Rank::Three,
            Rank::Four,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
        ],
    );
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let report = play_turn(&mut alice, &mut bob, &mut deck, &mut rng);

    assert_eq!(report.result, TurnResult::Won);
    assert_eq!(report.events.last(), Some(&TurnEvent::Book(Rank::Five)));
    assert!(alice.has_won());
    assert_eq!(alice.hand().cards(), &[card(Rank::Jack, Suit::Spades)]);
}

#[test]
fn go_fish_from_empty_deck_passes_turn() {
    let (mut alice, mut bob, mut deck) = table(
        Ask(Rank::Four),
        &[card(Rank::Four, Suit::Hearts), card(Rank::Four, Suit::Spades)],
        &[card(Rank::Two, Suit::Hearts)],
        &[],
    );
    while deck.deal().is_some() {}
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let report = play_turn(&mut alice, &mut bob, &mut deck, &mut rng);

    assert_eq!(report.result, TurnResult::Next);
    assert_eq!(
        report.events,
        vec![
            TurnEvent::Asked(Rank::Four),
            TurnEvent::GoFish(Rank::Four),
            TurnEvent::DeckEmpty,
        ]
    );
    assert_eq!(alice.hand().count_rank(Rank::Four), 2);
}

#[test]
fn empty_hand_and_empty_deck_passes_without_asking() {
    let (mut alice, mut bob, mut deck) =
        table(Ask(Rank::Ace), &[], &[card(Rank::Ace, Suit::Hearts)], &[]);
    while deck.deal().is_some() {}
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let report = play_turn(&mut alice, &mut bob, &mut deck, &mut rng);

    assert_eq!(report.result, TurnResult::Next);
    assert_eq!(report.events, vec![TurnEvent::Passed]);
    assert_eq!(bob.hand().len(), 1);
}

#[test]
fn empty_hand_draws_before_asking() {
    let (mut alice, mut bob, mut deck) = table(
        Ask(Rank::Queen),
        &[],
        &[card(Rank::Two, Suit::Hearts)],
        &[card(Rank::Queen, Suit::Hearts), card(Rank::Three, Suit::Clubs)],
    );
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let report = play_turn(&mut alice, &mut bob, &mut deck, &mut rng);

    assert_eq!(report.result, TurnResult::Next);
    assert_eq!(
        report.events,
        vec![
            TurnEvent::DrewIntoEmptyHand(card(Rank::Queen, Suit::Hearts)),
            TurnEvent::Asked(Rank::Queen),
            TurnEvent::GoFish(Rank::Queen),
            TurnEvent::Drew(card(Rank::Three, Suit::Clubs)),
        ]
    );
    assert_eq!(alice.hand().len(), 2);
    assert_eq!(accounted([&alice, &bob], &deck), DECK_SIZE);
}

#[test]
fn missing_rank_choice_passes_turn() {
    let (mut alice, mut bob, mut deck) = table(
        Silent,
        &[card(Rank::Four, Suit::Hearts)],
        &[card(Rank::Two, Suit::Hearts)],
        &[],
    );
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let report = play_turn(&mut alice, &mut bob, &mut deck, &mut rng);

    assert_eq!(report.result, TurnResult::Next);
    assert_eq!(report.events, vec![TurnEvent::NoRank]);
    assert_eq!(alice.hand().len(), 1);
}

#[test]
#[should_panic(expected = "already completed")]
fn recording_duplicate_book_is_fatal() {
    let (mut alice, mut bob, mut deck) = table(
        Ask(Rank::Nine),
        &[card(Rank::Nine, Suit::Clubs), card(Rank::Nine, Suit::Spades)],
        &[card(Rank::Nine, Suit::Diamonds), card(Rank::Nine, Suit::Hearts)],
        &[],
    );
    give_books(&mut alice, &[Rank::Nine]);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let _ = play_turn(&mut alice, &mut bob, &mut deck, &mut rng);
}

#[test]
fn new_game_deals_both_hands() {
    let game = Game::new(
        GameOptions::default(),
        3,
        Player::computer("North"),
        Player::computer("South"),
    )
    .unwrap();

    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.deck().remaining(), DECK_SIZE - 14);
    assert_eq!(game.playing().name(), "North");
    assert_eq!(game.other().name(), "South");
    for player in game.players() {
        assert_eq!(player.hand().len(), 7);
    }
    assert_eq!(game.cards_accounted(), DECK_SIZE);
}

#[test]
fn oversized_hands_fail_to_deal() {
    let err = Game::new(
        GameOptions::default().with_hand_size(27),
        3,
        Player::computer("North"),
        Player::computer("South"),
    )
    .unwrap_err();

    assert_eq!(
        err,
        DealError::DeckExhausted {
            requested: 54,
            remaining: 52
        }
    );
}

#[test]
fn huge_hand_size_fails_to_deal() {
    let err = Game::new(
        GameOptions::default().with_hand_size(usize::MAX),
        1,
        Player::computer("North"),
        Player::computer("South"),
    )
    .unwrap_err();

    assert_eq!(
        err,
        DealError::DeckExhausted {
            requested: usize::MAX,
            remaining: 52
        }
    );
}

#[test]
fn computer_game_conserves_cards_and_ends_with_a_winner() {
    for seed in 0..20 {
        let mut game = Game::new(
            GameOptions::default(),
            seed,
            Player::computer("North"),
            Player::computer("South"),
        )
        .unwrap();

        let mut turns = 0;
        while game.winner().is_none() {
            let before = game.playing().name().to_string();
            let waiting = game.other().name().to_string();
            let report = game.play_turn().unwrap();
            assert_eq!(report.player, before);
            assert_eq!(report.opponent, waiting);
            assert_eq!(game.cards_accounted(), DECK_SIZE, "seed {seed}");
            match report.result {
                TurnResult::Next => assert_ne!(game.playing().name(), before),
                TurnResult::ExtraTurn | TurnResult::Won => {
                    assert_eq!(game.playing().name(), before);
                }
            }
            turns += 1;
            assert!(turns < 100_000, "seed {seed} did not finish");
        }

        let winner = game.winner().unwrap();
        assert_eq!(winner.books().len(), BOOKS_TO_WIN);
        for player in game.players() {
            let books = player.books();
            for (i, rank) in books.iter().enumerate() {
                assert!(!books[..i].contains(rank));
            }
        }
        assert_eq!(game.play_turn().unwrap_err(), TurnError::GameOver);
    }
}

#[test]
fn same_seed_replays_same_game() {
    let play = |seed| {
        let mut game = Game::new(
            GameOptions::default(),
            seed,
            Player::computer("North"),
            Player::computer("South"),
        )
        .unwrap();
        let mut reports = Vec::new();
        while let Ok(report) = game.play_turn() {
            reports.push(report);
        }
        reports
    };

    assert_eq!(play(11), play(11));
}
