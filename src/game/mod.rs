//! Game engine and state management.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::sync::Mutex;

use crate::event::GameEvent;
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};

mod roster;
mod scoring;
pub mod state;

pub use state::Phase;

/// A Farkle score keeper that manages the roster, scores, and game phase.
///
/// The game is driven by a front end that calls its operations in response
/// to user actions and reads its accessors to render. Every mutating
/// operation holds the phase lock for its whole duration, so calls through a
/// shared reference are applied one at a time.
///
/// Locks are always taken in field declaration order.
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Current game phase.
    state: Mutex<Phase>,
    /// Next player ID to assign.
    next_id: AtomicU32,
    /// Roster in insertion order.
    players: Mutex<Vec<PlayerId>>,
    /// Player names (`player_id` -> display name).
    names: Mutex<HashMap<PlayerId, String>>,
    /// Player scores (`player_id` -> cumulative score).
    scores: Mutex<HashMap<PlayerId, i64>>,
    /// Player targeted by the pending score entry.
    selected: Mutex<Option<PlayerId>>,
    /// Player who crossed the threshold, while the phase is `Won`.
    winner: Mutex<Option<PlayerId>>,
    /// Events not yet drained by the front end.
    events: Mutex<Vec<GameEvent>>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameOptions::default())
    }
}

impl Game {
    /// Creates a new game in the setup phase.
    ///
    /// A `win_threshold` below 1 is raised to 1, as with
    /// [`GameOptions::with_win_threshold`].
    ///
    /// # Example
    ///
    /// ```
    /// use farkle_keeper::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default());
    /// assert_eq!(game.phase(), Phase::Setup);
    /// assert_eq!(game.player_count(), 0);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Self {
            options: options.normalized(),
            state: Mutex::new(Phase::Setup),
            next_id: AtomicU32::new(0),
            players: Mutex::new(Vec::new()),
            names: Mutex::new(HashMap::new()),
            scores: Mutex::new(HashMap::new()),
            selected: Mutex::new(None),
            winner: Mutex::new(None),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game phase.
    pub fn phase(&self) -> Phase {
        *self.state.lock()
    }

    /// Returns the number of registered players.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Returns every player in roster order.
    pub fn players(&self) -> Vec<Player> {
        let players = self.players.lock();
        let names = self.names.lock();
        let scores = self.scores.lock();
        players
            .iter()
            .filter_map(|&id| snapshot(id, &names, &scores))
            .collect()
    }

    /// Returns the player with the given ID.
    pub fn player(&self, player_id: PlayerId) -> Option<Player> {
        let names = self.names.lock();
        let scores = self.scores.lock();
        snapshot(player_id, &names, &scores)
    }

    /// Returns the player at `index` in roster order.
    pub fn player_at(&self, index: usize) -> Option<Player> {
        let id = self.players.lock().get(index).copied()?;
        self.player(id)
    }

    /// Returns the player currently targeted for score entry.
    ///
    /// The snapshot carries the player's current score, which a front end
    /// shows next to the entry field.
    pub fn selected_player(&self) -> Option<Player> {
        let id = (*self.selected.lock())?;
        self.player(id)
    }

    /// Returns the roster index of the selected player.
    pub fn selected_index(&self) -> Option<usize> {
        let players = self.players.lock();
        let id = (*self.selected.lock())?;
        players.iter().position(|&p| p == id)
    }

    /// Returns the winning player while the phase is [`Phase::Won`].
    pub fn winner(&self) -> Option<Player> {
        let id = (*self.winner.lock())?;
        self.player(id)
    }

    /// Returns the winner's name while the phase is [`Phase::Won`].
    pub fn winner_name(&self) -> Option<String> {
        self.winner().map(|player| player.name)
    }

    /// Returns the player with the highest score.
    ///
    /// Ties go to whoever joined first. Returns `None` for an empty roster.
    pub fn leader(&self) -> Option<Player> {
        self.players()
            .into_iter()
            .rev()
            .max_by_key(|player| player.score)
    }

    /// Takes every event recorded since the last call, oldest first.
    pub fn drain_events(&self) -> Vec<GameEvent> {
        core::mem::take(&mut *self.events.lock())
    }

    /// Clears the roster and returns the game to [`Phase::Setup`].
    ///
    /// Allowed in every phase. Player IDs are not reused after a restart.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn restart_game(&self) {
        let mut state = self.state.lock();
        let previous = *state;

        self.players.lock().clear();
        self.names.lock().clear();
        self.scores.lock().clear();
        *self.selected.lock() = None;
        *self.winner.lock() = None;
        *state = Phase::Setup;

        self.record(GameEvent::GameRestarted);
        log::info!("game restarted from {previous:?}");
    }

    fn allocate_id(&self) -> PlayerId {
        PlayerId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    fn record(&self, event: GameEvent) {
        self.events.lock().push(event);
    }
}

fn snapshot(
    id: PlayerId,
    names: &HashMap<PlayerId, String>,
    scores: &HashMap<PlayerId, i64>,
) -> Option<Player> {
    Some(Player {
        id,
        name: names.get(&id)?.clone(),
        score: scores.get(&id).copied()?,
    })
}
