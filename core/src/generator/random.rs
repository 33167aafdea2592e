use alloc::vec::Vec;
use ndarray::Array2;

use super::*;

/// Purely random generation by rejection sampling: draw a uniform position, redraw on a duplicate.
///
/// Expected draws grow sharply as the board fills up (the last mine on an `n`-cell board with `n - 1` mines takes
/// about `n` draws on its own), which is fine for the small boards this is meant for but does not scale to dense
/// boards on large grids.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn sample_positions(&self, config: GameConfig) -> Vec<Coord2> {
        use rand::prelude::*;

        let size = config.size();
        let target = usize::from(config.mines());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut positions: Vec<Coord2> = Vec::with_capacity(target);
        let mut rejected = 0usize;

        while positions.len() < target {
            let position = (rng.random_range(0..size), rng.random_range(0..size));
            if positions.contains(&position) {
                rejected += 1;
            } else {
                positions.push(position);
            }
        }

        log::trace!("rejected {} duplicate samples", rejected);
        positions
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        let total_cells = config.total_cells();
        if config.mines() > total_cells / 2 {
            log::warn!(
                "Dense minefield ({} mines in {} cells), rejection sampling may be slow",
                config.mines(),
                total_cells
            );
        }

        let positions = self.sample_positions(config);

        let size = config.size();
        let mut mine_mask: Array2<bool> = Array2::from_elem((size, size).to_nd_index(), false);
        for &coords in &positions {
            mine_mask[coords.to_nd_index()] = true;
        }

        let board = Board::from_mine_mask(size, &mine_mask);
        log::debug!(
            "generated {}x{} board with {} mines (seed {})",
            size,
            size,
            board.mine_count(),
            self.seed
        );
        board
    }
}
