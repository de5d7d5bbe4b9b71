use serde::{Deserialize, Serialize};

/// Player-visible state of a single board cell.
///
/// Hidden, flagged, and revealed are mutually exclusive by construction;
/// `Mine` and `Exploded` only appear once the game is lost and every mine is
/// disclosed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Hidden,
    Flagged,
    /// Revealed safe cell with its adjacent mine count (0..=8).
    Revealed(u8),
    /// Disclosed mine, shown after a loss.
    Mine,
    /// The mine whose reveal ended the game.
    Exploded,
}

impl Cell {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_) | Self::Mine | Self::Exploded)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Hidden
    }
}
