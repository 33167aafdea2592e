use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Hidden,
    /// Safe cell that was opened, with its adjacent mine count.
    Revealed(u8),
    /// Mine cell that was opened, ends the game.
    Exploded,
    Marked,
}

impl CellStatus {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_) | Self::Exploded)
    }

    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Revealed(count) => Some(count),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    coords: Coord2,
    is_mine: bool,
    status: CellStatus,
}

impl Cell {
    pub(crate) const fn new(coords: Coord2, is_mine: bool) -> Self {
        Self {
            coords,
            is_mine,
            status: CellStatus::Hidden,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn x(&self) -> Coord {
        self.coords.0
    }

    pub const fn y(&self) -> Coord {
        self.coords.1
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn status(&self) -> CellStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: CellStatus) {
        self.status = status;
    }
}
