//! Score entry types.

use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::player::PlayerId;

/// Result of submitting a score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScoreOutcome {
    /// The player is still below the winning threshold.
    Continued {
        /// The player who scored.
        player: PlayerId,
        /// Their new total.
        score: i64,
    },
    /// The player reached the winning threshold and the game is won.
    Won {
        /// The winning player.
        player: PlayerId,
        /// The winner's display name.
        name: String,
        /// The winner's final total.
        score: i64,
    },
}

impl ScoreOutcome {
    /// Returns the player who scored.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        match self {
            Self::Continued { player, .. } | Self::Won { player, .. } => *player,
        }
    }

    /// Returns the player's total after the submission.
    #[must_use]
    pub const fn score(&self) -> i64 {
        match self {
            Self::Continued { score, .. } | Self::Won { score, .. } => *score,
        }
    }

    /// Returns whether this submission won the game.
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

/// Parses score text typed by a player.
///
/// Surrounding whitespace is ignored and a leading `+` or `-` is accepted.
///
/// # Errors
///
/// Returns [`GameError::InvalidInput`] if the text is not an integer.
///
/// # Example
///
/// ```
/// use farkle_keeper::{GameError, parse_score};
///
/// assert_eq!(parse_score(" 350 "), Ok(350));
/// assert_eq!(parse_score("-50"), Ok(-50));
/// assert_eq!(parse_score("1,000"), Err(GameError::InvalidInput));
/// ```
pub fn parse_score(text: &str) -> Result<i64, GameError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| GameError::InvalidInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_non_integers() {
        assert_eq!(parse_score(""), Err(GameError::InvalidInput));
        assert_eq!(parse_score("   "), Err(GameError::InvalidInput));
        assert_eq!(parse_score("12.5"), Err(GameError::InvalidInput));
        assert_eq!(parse_score("five"), Err(GameError::InvalidInput));
        assert_eq!(parse_score("99999999999999999999"), Err(GameError::InvalidInput));
    }

    #[test]
    fn parse_accepts_signs() {
        assert_eq!(parse_score("+500"), Ok(500));
        assert_eq!(parse_score("0"), Ok(0));
        assert_eq!(parse_score("\t-200\n"), Ok(-200));
    }

    #[test]
    fn outcome_accessors() {
        let id = PlayerId::new(3);
        let continued = ScoreOutcome::Continued {
            player: id,
            score: 750,
        };
        assert_eq!(continued.player(), id);
        assert_eq!(continued.score(), 750);
        assert!(!continued.is_won());

        let won = ScoreOutcome::Won {
            player: id,
            name: String::from("Bob"),
            score: 10_050,
        };
        assert_eq!(won.score(), 10_050);
        assert!(won.is_won());
    }
}
