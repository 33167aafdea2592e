use crate::*;

impl Board {
    /// Flips a cell between hidden and marked, revealed cells are left untouched.
    ///
    /// Out-of-range coordinates are refused with [`GameError::InvalidCoords`] and leave the board untouched.
    pub fn toggle_mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use CellStatus::*;

        let coords = self.validate_coords(coords)?;
        Ok(match self.status_at(coords) {
            Hidden => {
                self.set_status_at(coords, Marked);
                MarkOutcome::Changed
            }
            Marked => {
                self.set_status_at(coords, Hidden);
                MarkOutcome::Changed
            }
            Revealed(_) | Exploded => MarkOutcome::NoChange,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_round_trips() {
        let mut board = Board::from_mine_coords(2, &[(0, 0)]).unwrap();

        assert_eq!(board.toggle_mark((1, 0)), Ok(MarkOutcome::Changed));
        assert_eq!(board[(1, 0)].status(), CellStatus::Marked);
        assert_eq!(board.toggle_mark((1, 0)), Ok(MarkOutcome::Changed));
        assert_eq!(board[(1, 0)].status(), CellStatus::Hidden);
    }

    #[test]
    fn toggle_on_revealed_cell_is_noop() {
        let mut board = Board::from_mine_coords(2, &[(0, 0)]).unwrap();
        board.reveal((1, 1)).unwrap();

        assert_eq!(board.toggle_mark((1, 1)), Ok(MarkOutcome::NoChange));
        assert_eq!(board[(1, 1)].status(), CellStatus::Revealed(1));
    }

    #[test]
    fn toggle_out_of_range_is_rejected_without_mutation() {
        let mut board = Board::from_mine_coords(3, &[(0, 0)]).unwrap();
        let before = board.clone();

        assert_eq!(board.toggle_mark((0, 7)), Err(GameError::InvalidCoords));
        assert_eq!(board.toggle_mark((3, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board, before);
        assert_eq!(board.remaining_mines(), 1);
    }

    #[test]
    fn remaining_mines_tracks_marks_and_goes_negative() {
        let mut board = Board::from_mine_coords(3, &[(0, 0)]).unwrap();
        assert_eq!(board.remaining_mines(), 1);

        board.toggle_mark((0, 0)).unwrap();
        assert_eq!(board.remaining_mines(), 0);

        board.toggle_mark((1, 1)).unwrap();
        board.toggle_mark((2, 2)).unwrap();
        assert_eq!(board.remaining_mines(), -2);

        board.toggle_mark((2, 2)).unwrap();
        assert_eq!(board.remaining_mines(), -1);
        assert_eq!(board.marked_count(), 2);
    }
}
