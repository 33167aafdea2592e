#![no_std]

extern crate alloc;

use serde::Serialize;

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use status::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod mark;
mod reveal;
mod status;
mod types;

/// Board parameters, only constructible in a consistent state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    size: Coord,
    mines: CellCount,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord = 10;
    pub const DEFAULT_MINES: CellCount = 10;

    /// Refuses empty boards and boards without a single safe cell.
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidBoardSize);
        }
        if mines >= mult(size, size) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self { size, mines })
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            mines: Self::DEFAULT_MINES,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
