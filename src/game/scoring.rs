use crate::error::GameError;
use crate::event::GameEvent;
use crate::player::PlayerId;
use crate::score::{ScoreOutcome, parse_score};

use super::{Game, Phase};

impl Game {
    fn ensure_score_entry(&self) -> Result<PlayerId, GameError> {
        if !self.state.lock().allows_scoring() {
            return Err(GameError::WrongPhase);
        }

        self.selected.lock().ok_or(GameError::NoPlayerSelected)
    }

    /// Selects the player at `index` for score entry.
    ///
    /// Selecting again replaces the previous selection. Scores are not
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress or no player exists
    /// at `index`.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn select_player(&self, index: usize) -> Result<(), GameError> {
        let state = self.state.lock();
        if !state.allows_scoring() {
            return Err(GameError::WrongPhase);
        }

        let id = self
            .players
            .lock()
            .get(index)
            .copied()
            .ok_or(GameError::IndexOutOfRange)?;
        *self.selected.lock() = Some(id);

        self.record(GameEvent::PlayerSelected { player: id });
        log::debug!("player {id} selected for score entry");

        Ok(())
    }

    /// Adds `delta` to the selected player's score and checks for a win.
    ///
    /// Any integer is accepted, including zero and negative values, unless
    /// [`GameOptions::allow_negative_scores`](crate::GameOptions) is off. The
    /// win check runs immediately: if the new total reaches the threshold the
    /// phase becomes [`Phase::Won`] and the outcome names the winner. The
    /// selection is cleared once the score is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress, no player is
    /// selected, the delta is negative while negative scores are disabled, or
    /// the new total overflows.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn submit_score(&self, delta: i64) -> Result<ScoreOutcome, GameError> {
        let mut state = self.state.lock();
        if !state.allows_scoring() {
            return Err(GameError::WrongPhase);
        }

        let names = self.names.lock();
        let mut scores = self.scores.lock();
        let mut selected = self.selected.lock();
        let player = selected.ok_or(GameError::NoPlayerSelected)?;

        if delta < 0 && !self.options.allow_negative_scores {
            return Err(GameError::InvalidInput);
        }

        let name = names.get(&player).ok_or(GameError::IndexOutOfRange)?;
        let total = scores.get_mut(&player).ok_or(GameError::IndexOutOfRange)?;
        let score = total.checked_add(delta).ok_or(GameError::ScoreOverflow)?;

        *total = score;
        *selected = None;
        self.record(GameEvent::ScoreSubmitted {
            player,
            delta,
            score,
        });

        if score < self.options.win_threshold {
            log::trace!("player {player} scored {delta}, total {score}");
            return Ok(ScoreOutcome::Continued { player, score });
        }

        *state = Phase::Won;
        *self.winner.lock() = Some(player);
        self.record(GameEvent::GameWon { player, score });
        log::info!("player {player} ({name}) wins with {score}");

        Ok(ScoreOutcome::Won {
            player,
            name: name.clone(),
            score,
        })
    }

    /// Parses score text and submits it for the selected player.
    ///
    /// The phase and selection are checked before the text, so a front end
    /// gets the same error ordering as [`Game::submit_score`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress, no player is
    /// selected, the text is not an integer, or [`Game::submit_score`]
    /// rejects the value.
    pub fn submit_score_text(&self, text: &str) -> Result<ScoreOutcome, GameError> {
        self.ensure_score_entry()?;
        let delta = parse_score(text)?;
        self.submit_score(delta)
    }

    /// Abandons the pending score entry.
    ///
    /// Returns `true` if a player was selected.
    pub fn cancel_score_entry(&self) -> bool {
        let _state = self.state.lock();
        let Some(player) = self.selected.lock().take() else {
            return false;
        };

        self.record(GameEvent::SelectionCleared);
        log::debug!("score entry for player {player} cancelled");

        true
    }

    /// Resumes scoring after a win, keeping every score.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been won.
    pub fn continue_after_win(&self) -> Result<(), GameError> {
        let mut state = self.state.lock();
        if *state != Phase::Won {
            return Err(GameError::WrongPhase);
        }

        *self.winner.lock() = None;
        *state = Phase::InProgress;
        drop(state);

        self.record(GameEvent::GameContinued);
        log::debug!("play continues after win");

        Ok(())
    }
}
