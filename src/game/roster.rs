use alloc::string::String;

use crate::error::GameError;
use crate::event::GameEvent;
use crate::player::{Player, PlayerId, normalize_name};

use super::{Game, Phase};

impl Game {
    fn ensure_setup(phase: Phase) -> Result<(), GameError> {
        if phase.allows_roster_changes() {
            Ok(())
        } else {
            Err(GameError::WrongPhase)
        }
    }

    /// Adds a player with a score of zero to the end of the roster.
    ///
    /// Surrounding whitespace is trimmed from `name`. Returns the new
    /// player's ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in setup, the trimmed name is
    /// empty, or the name is taken and duplicate names are disabled.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn add_player(&self, name: &str) -> Result<PlayerId, GameError> {
        let state = self.state.lock();
        Self::ensure_setup(*state)?;

        let name = normalize_name(name).ok_or(GameError::InvalidInput)?;

        let mut players = self.players.lock();
        let mut names = self.names.lock();
        if !self.options.allow_duplicate_names && names.values().any(|taken| taken == name) {
            return Err(GameError::DuplicateName);
        }

        let id = self.allocate_id();
        let index = players.len();
        players.push(id);
        names.insert(id, String::from(name));
        self.scores.lock().insert(id, 0);

        self.record(GameEvent::PlayerAdded { player: id, index });
        log::debug!("player {id} ({name}) added at {index}");

        Ok(id)
    }

    /// Removes the player at `index`, keeping the order of the others.
    ///
    /// Returns the removed player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in setup or no player exists at
    /// `index`.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn remove_player(&self, index: usize) -> Result<Player, GameError> {
        let state = self.state.lock();
        Self::ensure_setup(*state)?;

        let mut players = self.players.lock();
        if index >= players.len() {
            return Err(GameError::IndexOutOfRange);
        }

        let id = players.remove(index);
        let name = self.names.lock().remove(&id).unwrap_or_default();
        let score = self.scores.lock().remove(&id).unwrap_or_default();

        self.record(GameEvent::PlayerRemoved { player: id, index });
        log::debug!("player {id} ({name}) removed from {index}");

        Ok(Player { id, name, score })
    }

    /// Ends setup and starts scoring.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in setup or no players have been
    /// added.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn start_game(&self) -> Result<(), GameError> {
        let mut state = self.state.lock();
        Self::ensure_setup(*state)?;

        let count = self.players.lock().len();
        if count == 0 {
            return Err(GameError::EmptyRoster);
        }

        *state = Phase::InProgress;

        self.record(GameEvent::GameStarted { players: count });
        log::debug!("game started with {count} players");

        Ok(())
    }
}
