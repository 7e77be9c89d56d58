//! Game configuration options.

/// Score at which a player wins under the standard rules.
pub const WIN_THRESHOLD: i64 = 10_000;

/// Configuration options for a Farkle game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use farkle_keeper::GameOptions;
///
/// let options = GameOptions::default()
///     .with_win_threshold(5_000)
///     .with_allow_duplicate_names(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Score a player must reach to win.
    pub win_threshold: i64,
    /// Whether two players may share a display name.
    pub allow_duplicate_names: bool,
    /// Whether negative score entries are accepted.
    pub allow_negative_scores: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            win_threshold: WIN_THRESHOLD,
            allow_duplicate_names: true,
            allow_negative_scores: true,
        }
    }
}

impl GameOptions {
    /// Sets the winning score.
    ///
    /// Thresholds below 1 are raised to 1: every player starts at zero, and
    /// nobody may already be at the threshold when the game starts.
    ///
    /// # Example
    ///
    /// ```
    /// use farkle_keeper::GameOptions;
    ///
    /// let options = GameOptions::default().with_win_threshold(4_000);
    /// assert_eq!(options.win_threshold, 4_000);
    ///
    /// let options = GameOptions::default().with_win_threshold(-10);
    /// assert_eq!(options.win_threshold, 1);
    /// ```
    #[must_use]
    pub const fn with_win_threshold(mut self, threshold: i64) -> Self {
        self.win_threshold = if threshold < 1 { 1 } else { threshold };
        self
    }

    /// Sets whether duplicate player names are accepted.
    ///
    /// Players are always tracked by [`PlayerId`](crate::PlayerId), so
    /// duplicates never confuse score entry; this only controls whether
    /// [`Game::add_player`](crate::Game::add_player) rejects them.
    ///
    /// # Example
    ///
    /// ```
    /// use farkle_keeper::GameOptions;
    ///
    /// let options = GameOptions::default().with_allow_duplicate_names(false);
    /// assert_eq!(options.allow_duplicate_names, false);
    /// ```
    #[must_use]
    pub const fn with_allow_duplicate_names(mut self, allowed: bool) -> Self {
        self.allow_duplicate_names = allowed;
        self
    }

    /// Sets whether negative score entries are accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use farkle_keeper::GameOptions;
    ///
    /// let options = GameOptions::default().with_allow_negative_scores(false);
    /// assert_eq!(options.allow_negative_scores, false);
    /// ```
    #[must_use]
    pub const fn with_allow_negative_scores(mut self, allowed: bool) -> Self {
        self.allow_negative_scores = allowed;
        self
    }

    /// Applies the builder's bounds to options assembled by hand.
    pub(crate) const fn normalized(self) -> Self {
        self.with_win_threshold(self.win_threshold)
    }
}
