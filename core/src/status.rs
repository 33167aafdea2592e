use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Board {
    /// Scans the whole board, a revealed mine always reports [`GameStatus::Lost`].
    pub fn evaluate_status(&self) -> GameStatus {
        if self.is_lost() {
            GameStatus::Lost
        } else if self.is_won() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_lost(&self) -> bool {
        self.iter().any(|cell| cell.status() == CellStatus::Exploded)
    }

    /// Every safe cell is open and every mine is still hidden or marked.
    pub fn is_won(&self) -> bool {
        self.iter().all(|cell| match (cell.is_mine(), cell.status()) {
            (false, CellStatus::Revealed(_)) => true,
            (true, CellStatus::Hidden | CellStatus::Marked) => true,
            _ => false,
        })
    }
}
