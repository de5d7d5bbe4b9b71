use serde::{Deserialize, Serialize};

use crate::GameState;

/// Session-lifetime tally of finished games, kept by the caller between
/// boards. Cancelled games are not counted, matching the main-menu behavior
/// this engine was built for. Nothing is persisted by the crate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub won: u32,
    pub lost: u32,
}

impl SessionStats {
    pub fn record(&mut self, state: GameState) {
        match state {
            GameState::Won => self.won += 1,
            GameState::Lost => self.lost += 1,
            GameState::InProgress | GameState::Cancelled => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallies_wins_and_losses_only() {
        let mut stats = SessionStats::default();
        stats.record(GameState::Won);
        stats.record(GameState::Lost);
        stats.record(GameState::Lost);
        stats.record(GameState::Cancelled);
        stats.record(GameState::InProgress);

        assert_eq!(stats, SessionStats { won: 1, lost: 2 });
    }
}
