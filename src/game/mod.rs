//! Game session and turn resolution.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::BOOK_SIZE;
use crate::deck::Deck;
use crate::error::{DealError, TurnError};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{TurnReport, TurnResult};

pub mod state;
mod turn;

pub use state::GameState;
pub use turn::play_turn;

/// A two-player Go Fish game that owns the deck, the players, and the random
/// generator, and keeps track of whose turn it is.
///
/// Use [`GameOptions`] to configure the deal.
#[derive(Debug)]
pub struct Game {
    /// The shared deck.
    deck: Deck,
    /// Both players, in seating order.
    players: [Player; 2],
    /// Index of the player whose turn it is.
    playing: usize,
    /// Current game state.
    state: GameState,
    /// Game options.
    options: GameOptions,
    /// Random number generator for the shuffle and computer choices.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed, shuffles the deck, and deals
    /// both hands. `first` deals first and takes the first turn.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] if the deck cannot cover both
    /// hands at the configured hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::{Game, GameOptions, Player};
    ///
    /// let game = Game::new(
    ///     GameOptions::default(),
    ///     7,
    ///     Player::computer("North"),
    ///     Player::computer("South"),
    /// )
    /// .unwrap();
    /// assert_eq!(game.deck().remaining(), 38);
    /// ```
    pub fn new(
        options: GameOptions,
        seed: u64,
        first: Player,
        second: Player,
    ) -> Result<Self, DealError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let mut players = [first, second];
        let requested = options.hand_size.saturating_mul(players.len());
        if deck.remaining() < requested {
            return Err(DealError::DeckExhausted {
                requested,
                remaining: deck.remaining(),
            });
        }
        for player in &mut players {
            player.deal_cards(&mut deck, options.hand_size)?;
        }

        log::debug!(
            "new game: {} vs {}, {} cards each",
            players[0].name(),
            players[1].name(),
            options.hand_size
        );

        Ok(Self {
            deck,
            players,
            playing: 0,
            state: GameState::InProgress,
            options,
            rng,
        })
    }

    /// Resolves the current player's turn and advances to whoever acts next.
    ///
    /// The same player keeps the turn on [`TurnResult::ExtraTurn`]; the
    /// players swap on [`TurnResult::Next`]; [`TurnResult::Won`] ends the
    /// game.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::GameOver`] once a player has won.
    pub fn play_turn(&mut self) -> Result<TurnReport, TurnError> {
        if self.state != GameState::InProgress {
            return Err(TurnError::GameOver);
        }

        let [first, second] = &mut self.players;
        let (playing, other) = if self.playing == 0 {
            (first, second)
        } else {
            (second, first)
        };

        let report = play_turn(playing, other, &mut self.deck, &mut self.rng);

        match report.result {
            TurnResult::Won => {
                log::info!("{} won the game", playing.name());
                self.state = GameState::Won {
                    winner: self.playing,
                };
            }
            TurnResult::ExtraTurn => {}
            TurnResult::Next => self.playing = 1 - self.playing,
        }

        Ok(report)
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub const fn playing(&self) -> &Player {
        &self.players[self.playing]
    }

    /// Returns the player waiting for their turn.
    #[must_use]
    pub const fn other(&self) -> &Player {
        &self.players[1 - self.playing]
    }

    /// Returns both players, in seating order.
    #[must_use]
    pub const fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the winner, if the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<&Player> {
        match self.state {
            GameState::Won { winner } => Some(&self.players[winner]),
            GameState::InProgress => None,
        }
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Counts every card in the deck, in both hands, and in completed books.
    ///
    /// This is always [`crate::DECK_SIZE`].
    #[must_use]
    pub fn cards_accounted(&self) -> usize {
        self.deck.remaining()
            + self
                .players
                .iter()
                .map(|player| player.hand().len() + BOOK_SIZE * player.books().len())
                .sum::<usize>()
    }
}
