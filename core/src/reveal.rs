use alloc::collections::VecDeque;

use crate::*;

impl Board {
    /// Opens the cell at `coords`, flooding outwards from cells with no adjacent mines.
    ///
    /// Only hidden cells are ever opened, which is also what terminates the flood: a cell reached through several
    /// paths is opened on the first visit and skipped on every later one. Marked cells are left alone, even when the
    /// flood reaches them.
    ///
    /// Out-of-range coordinates are refused with [`GameError::InvalidCoords`] and leave the board untouched.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        if !self.status_at(coords).is_hidden() {
            return Ok(RevealOutcome::NoChange);
        }

        if self[coords].is_mine() {
            log::trace!("reveal {:?}: mine", coords);
            self.set_status_at(coords, CellStatus::Exploded);
            return Ok(RevealOutcome::HitMine);
        }

        let mut to_visit = VecDeque::from([coords]);
        while let Some(visit_coords) = to_visit.pop_front() {
            if !self.status_at(visit_coords).is_hidden() {
                continue;
            }

            let adjacent_mines = self.adjacent_mine_count(visit_coords);
            log::trace!("reveal {:?}: {}", visit_coords, adjacent_mines);
            self.set_status_at(visit_coords, CellStatus::Revealed(adjacent_mines));

            if adjacent_mines == 0 {
                to_visit.extend(
                    self.iter_neighbors(visit_coords)
                        .filter(|&pos| self.status_at(pos).is_hidden()),
                );
            }
        }

        Ok(RevealOutcome::Revealed)
    }
}
