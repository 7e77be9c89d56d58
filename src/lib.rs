//! A Farkle score keeper with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that tracks a roster of players, adds
//! manually entered points to their running totals, and declares a winner as
//! soon as one of them reaches the winning threshold. There is no turn order
//! and no dice simulation: the table rolls real dice and the game only keeps
//! score.
//!
//! # Example
//!
//! ```
//! use farkle_keeper::{Game, GameOptions, Phase, ScoreOutcome};
//!
//! let game = Game::new(GameOptions::default());
//! game.add_player("Alice").unwrap();
//! game.add_player("Bob").unwrap();
//! game.start_game().unwrap();
//!
//! game.select_player(1).unwrap();
//! let outcome = game.submit_score(10_000).unwrap();
//!
//! assert!(matches!(outcome, ScoreOutcome::Won { .. }));
//! assert_eq!(game.phase(), Phase::Won);
//! assert_eq!(game.winner_name().as_deref(), Some("Bob"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod player;
pub mod score;
mod sync;

// Re-export main types
pub use error::GameError;
pub use event::GameEvent;
pub use game::{Game, Phase};
pub use options::{GameOptions, WIN_THRESHOLD};
pub use player::{Player, PlayerId};
pub use score::{ScoreOutcome, parse_score};
