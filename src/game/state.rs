//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Turns are still being played.
    InProgress,
    /// A player has completed every book.
    Won {
        /// Index of the winner in [`crate::Game::players`].
        winner: usize,
    },
}
