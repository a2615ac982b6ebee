//! Game configuration options.

/// Configuration options for a Go Fish game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use gofish::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(5)
///     .with_reveal_hands(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each player at the start of the game.
    pub hand_size: usize,
    /// Whether the presentation layer should show every player's hand,
    /// not just the human's.
    pub reveal_hands: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 7,
            reveal_hands: false,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets whether every player's hand is shown.
    #[must_use]
    pub const fn with_reveal_hands(mut self, reveal_hands: bool) -> Self {
        self.reveal_hands = reveal_hands;
        self
    }
}
