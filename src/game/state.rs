//! Game phase types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// Players are being added or removed.
    #[default]
    Setup,
    /// Scores are being entered.
    InProgress,
    /// A player reached the winning threshold.
    Won,
}

impl Phase {
    /// Returns whether the roster may change in this phase.
    #[must_use]
    pub const fn allows_roster_changes(self) -> bool {
        matches!(self, Self::Setup)
    }

    /// Returns whether scores may be entered in this phase.
    #[must_use]
    pub const fn allows_scoring(self) -> bool {
        matches!(self, Self::InProgress)
    }
}
