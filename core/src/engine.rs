use serde::Serialize;

use crate::*;

/// A single game from first click to win or loss.
///
/// Owns the [`Board`] and refuses any move once a terminal [`GameStatus`] was reached. Moves on out-of-range
/// coordinates or after the end are reported as errors and never mutate the board.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayEngine {
    board: Board,
    status: GameStatus,
}

impl PlayEngine {
    pub fn new(board: Board) -> Self {
        let status = board.evaluate_status();
        Self { board, status }
    }

    /// Generates a fresh board for `config` and starts a game on it.
    pub fn generate<G: BoardGenerator>(generator: G, config: GameConfig) -> Self {
        Self::new(generator.generate(config))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn remaining_mines(&self) -> isize {
        self.board.remaining_mines()
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.board.get(coords)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_in_progress()?;

        let outcome = self.board.reveal(coords)?;
        if !outcome.has_update() {
            return Ok(outcome);
        }

        self.status = self.board.evaluate_status();
        Ok(match self.status {
            GameStatus::InProgress => outcome,
            GameStatus::Won => {
                log::debug!("game won");
                RevealOutcome::Won
            }
            GameStatus::Lost => {
                log::debug!("game lost at {:?}", coords);
                RevealOutcome::HitMine
            }
        })
    }

    pub fn toggle_mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_in_progress()?;

        self.board.toggle_mark(coords)
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(size: Coord, mines: &[Coord2]) -> PlayEngine {
        PlayEngine::new(Board::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn reveal_mine_loses() {
        let mut engine = engine(3, &[(0, 0)]);

        assert_eq!(engine.reveal((0, 0)), Ok(RevealOutcome::HitMine));
        assert_eq!(engine.status(), GameStatus::Lost);
        assert!(engine.is_finished());
    }

    #[test]
    fn flood_fill_to_win() {
        let mut engine = engine(3, &[(0, 0)]);

        assert_eq!(engine.reveal((2, 2)), Ok(RevealOutcome::Won));
        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(
            engine.cell_at((0, 0)).map(Cell::status),
            Some(CellStatus::Hidden)
        );
    }

    #[test]
    fn reveal_one_by_one_to_win() {
        let mut engine = engine(2, &[(0, 0)]);

        assert_eq!(engine.reveal((1, 1)), Ok(RevealOutcome::Revealed));
        assert_eq!(engine.reveal((0, 1)), Ok(RevealOutcome::Revealed));
        assert_eq!(engine.reveal((1, 0)), Ok(RevealOutcome::Won));
        assert_eq!(engine.status(), GameStatus::Won);
    }

    #[test]
    fn repeated_reveal_is_noop() {
        let mut engine = engine(3, &[(0, 0)]);

        assert_eq!(engine.reveal((1, 1)), Ok(RevealOutcome::Revealed));
        let before = engine.clone();
        assert_eq!(engine.reveal((1, 1)), Ok(RevealOutcome::NoChange));
        assert_eq!(engine, before);
    }

    #[test]
    fn out_of_range_moves_are_rejected_without_mutation() {
        let mut engine = engine(3, &[(0, 0)]);
        let before = engine.clone();

        assert_eq!(engine.reveal((3, 0)), Err(GameError::InvalidCoords));
        assert_eq!(engine.toggle_mark((0, 3)), Err(GameError::InvalidCoords));
        assert_eq!(engine, before);
    }

    #[test]
    fn moves_after_end_are_rejected() {
        let mut engine = engine(3, &[(0, 0)]);
        engine.reveal((0, 0)).unwrap();
        let before = engine.clone();

        assert_eq!(engine.reveal((2, 2)), Err(GameError::AlreadyEnded));
        assert_eq!(engine.toggle_mark((2, 2)), Err(GameError::AlreadyEnded));
        assert_eq!(engine, before);
    }

    #[test]
    fn marked_cell_cannot_be_revealed() {
        let mut engine = engine(3, &[(0, 0)]);

        assert_eq!(engine.toggle_mark((0, 0)), Ok(MarkOutcome::Changed));
        assert_eq!(engine.reveal((0, 0)), Ok(RevealOutcome::NoChange));
        assert_eq!(engine.status(), GameStatus::InProgress);
    }

    #[test]
    fn remaining_mines_steps_by_one_per_toggle() {
        let mut engine = engine(3, &[(0, 0), (2, 2)]);
        assert_eq!(engine.remaining_mines(), 2);

        engine.toggle_mark((0, 0)).unwrap();
        assert_eq!(engine.remaining_mines(), 1);
        engine.toggle_mark((1, 1)).unwrap();
        assert_eq!(engine.remaining_mines(), 0);
        engine.toggle_mark((0, 1)).unwrap();
        assert_eq!(engine.remaining_mines(), -1);
        engine.toggle_mark((0, 1)).unwrap();
        assert_eq!(engine.remaining_mines(), 0);
    }

    #[test]
    fn only_plain_status_enums_can_be_deserialized() {
        use core::marker::PhantomData;
        use serde::de::DeserializeOwned;

        struct Deserializable<T>(PhantomData<T>);
        trait Fallback {
            const IMPLEMENTED: bool = false;
        }
        impl<T> Fallback for Deserializable<T> {}
        impl<T: DeserializeOwned> Deserializable<T> {
            const IMPLEMENTED: bool = true;
        }

        // a board can only come from its validating constructors
        assert!(!Deserializable::<Board>::IMPLEMENTED);
        assert!(!Deserializable::<Cell>::IMPLEMENTED);
        assert!(!Deserializable::<PlayEngine>::IMPLEMENTED);
        assert!(!Deserializable::<GameConfig>::IMPLEMENTED);
        assert!(Deserializable::<CellStatus>::IMPLEMENTED);
        assert!(Deserializable::<GameStatus>::IMPLEMENTED);
    }

    #[test]
    fn generated_game_starts_in_progress() {
        let engine = PlayEngine::generate(RandomBoardGenerator::new(1), GameConfig::default());

        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.size(), 10);
        assert_eq!(engine.total_mines(), 10);
        assert_eq!(engine.remaining_mines(), 10);
    }
}
