use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Square grid of cells with a fixed mine layout.
///
/// Cells are stored row-major with `x` as the outer axis. The set of mines never changes after construction, only
/// each cell's [`CellStatus`] does.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
    size: Coord,
    mine_count: CellCount,
}

impl Board {
    /// Builds a board with mines at exactly `mine_coords`, duplicates are collapsed.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidBoardSize);
        }

        let mut mine_mask: Array2<bool> = Array2::from_elem((size, size).to_nd_index(), false);
        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        let board = Self::from_mine_mask(size, &mine_mask);
        if board.mine_count >= board.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(board)
    }

    /// Caller guarantees `mine_mask` is `size` x `size`.
    pub(crate) fn from_mine_mask(size: Coord, mine_mask: &Array2<bool>) -> Self {
        let cells = Array2::from_shape_fn((size, size).to_nd_index(), |(x, y)| {
            Cell::new((x as Coord, y as Coord), mine_mask[[x, y]])
        });
        let mine_count = cells.iter().filter(|cell| cell.is_mine()).count() as CellCount;

        Self {
            cells,
            size,
            mine_count,
        }
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn dim(&self) -> Coord2 {
        (self.size, self.size)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        coords.0 < self.size && coords.1 < self.size
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.contains(coords).then(|| &self.cells[coords.to_nd_index()])
    }

    pub(crate) fn status_at(&self, coords: Coord2) -> CellStatus {
        self.cells[coords.to_nd_index()].status()
    }

    pub(crate) fn set_status_at(&mut self, coords: Coord2, status: CellStatus) {
        self.cells[coords.to_nd_index()].set_status(status);
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.dim())
    }

    /// Neighbouring cells of `coords` that lie on the board, see [`NeighborIter`] for the order.
    pub fn adjacent_cells(&self, coords: Coord2) -> impl Iterator<Item = &Cell> {
        self.iter_neighbors(coords).map(|pos| &self.cells[pos.to_nd_index()])
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.adjacent_cells(coords).filter(|cell| cell.is_mine()).count() as u8
    }

    pub fn marked_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.status() == CellStatus::Marked)
            .count() as CellCount
    }

    /// Mines minus marks, negative when the player placed more marks than there are mines.
    pub fn remaining_mines(&self) -> isize {
        (self.mine_count as isize) - (self.marked_count() as isize)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// One line per `y`, `#` hidden, `F` marked, `*` exploded, `.` empty, otherwise the adjacent mine count.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                match self.status_at((x, y)) {
                    CellStatus::Hidden => f.write_str("#")?,
                    CellStatus::Marked => f.write_str("F")?,
                    CellStatus::Exploded => f.write_str("*")?,
                    CellStatus::Revealed(0) => f.write_str(".")?,
                    CellStatus::Revealed(count) => write!(f, "{}", count)?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
