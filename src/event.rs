//! Change notifications for the presentation layer.
//!
//! Every successful mutation of a [`Game`](crate::Game) records one or more
//! events. A front end drains them with
//! [`Game::drain_events`](crate::Game::drain_events) after each call and
//! re-renders whatever changed. Failed operations record nothing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// Something that changed in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameEvent {
    /// A player joined the roster at `index`.
    PlayerAdded {
        /// The new player.
        player: PlayerId,
        /// Position in the roster.
        index: usize,
    },
    /// A player left the roster from `index`.
    PlayerRemoved {
        /// The removed player.
        player: PlayerId,
        /// Position the player occupied.
        index: usize,
    },
    /// Setup finished and scoring began.
    GameStarted {
        /// Number of players in the roster.
        players: usize,
    },
    /// A player was chosen for score entry.
    PlayerSelected {
        /// The selected player.
        player: PlayerId,
    },
    /// A pending score entry was cancelled.
    SelectionCleared,
    /// Points were added to a player's total.
    ScoreSubmitted {
        /// The player who scored.
        player: PlayerId,
        /// Points added.
        delta: i64,
        /// New total.
        score: i64,
    },
    /// A player reached the winning threshold.
    GameWon {
        /// The winner.
        player: PlayerId,
        /// The winner's total.
        score: i64,
    },
    /// Play resumed after a win.
    GameContinued,
    /// The roster was cleared and the game returned to setup.
    GameRestarted,
}
