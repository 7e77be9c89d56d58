//! Error types for game operations.

use thiserror::Error;

/// Errors returned by [`Game`](crate::Game) operations.
///
/// A failed operation never mutates the game; the caller can correct the
/// input and try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GameError {
    /// Empty player name or score text that is not an integer.
    #[error("invalid input")]
    InvalidInput,
    /// The operation is not allowed in the current phase.
    #[error("operation not allowed in the current phase")]
    WrongPhase,
    /// No player at the given index.
    #[error("player index out of range")]
    IndexOutOfRange,
    /// The game cannot start without players.
    #[error("no players have been added")]
    EmptyRoster,
    /// A score was submitted without selecting a player first.
    #[error("no player selected")]
    NoPlayerSelected,
    /// A player with this name is already registered.
    #[error("a player with this name already exists")]
    DuplicateName,
    /// The score would not fit in the score type.
    #[error("score overflow")]
    ScoreOverflow,
}
