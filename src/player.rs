//! Player types.

use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identifier assigned to a player when they join.
///
/// Ids are never reused within a [`Game`](crate::Game), even across
/// restarts, so a stale id can never point at a different player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerId(u32);

impl PlayerId {
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Snapshot of a registered player.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Player {
    /// The player ID.
    pub id: PlayerId,
    /// Display name, trimmed.
    pub name: String,
    /// Cumulative score.
    pub score: i64,
}

/// Trims a display name, returning `None` if nothing is left.
pub(crate) fn normalize_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_rejects_blank() {
        assert_eq!(normalize_name("  Alice "), Some("Alice"));
        assert_eq!(normalize_name("\t\n"), None);
        assert_eq!(normalize_name(""), None);
    }

    #[test]
    fn id_display_and_value() {
        let id = PlayerId::new(7);
        assert_eq!(id.get(), 7);
        assert_eq!(alloc::format!("{id}"), "#7");
        assert!(PlayerId::new(2) < id);
    }
}
