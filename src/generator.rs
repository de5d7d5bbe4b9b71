use ndarray::Array2;
use rand::prelude::*;

use crate::*;

/// Produces the mine placement for a fresh board.
pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}

/// Uniform random placement driven by a per-board seed.
///
/// Draws linear cell indices and redraws on collision with an already-chosen
/// mine until the requested number of distinct cells is set, so every layout
/// of `mines` cells is equally likely.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let total = config.total_cells();
        let width = config.size.0 as CellCount;

        let wanted = if config.mines > total {
            log::warn!(
                "Requested {} mines but the board only fits {}",
                config.mines,
                total
            );
            total
        } else {
            config.mines
        };

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;

        while placed < wanted {
            let pick: CellCount = rng.random_range(0..total);
            let coords = ((pick % width) as Coord, (pick / width) as Coord);
            let cell = &mut mine_mask[coords.to_nd_index()];
            if *cell {
                continue;
            }
            *cell = true;
            placed += 1;
        }

        log::debug!("Placed {} mines on a {:?} board", placed, config.size);
        MineLayout::from_mine_mask(mine_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_requested_mine_count() {
        for (size, mines) in [((10, 10), 10), ((8, 8), 10), ((3, 3), 8), ((2, 2), 3)] {
            let layout = RandomMineGenerator::new(7).generate(GameConfig::new(size, mines));
            assert_eq!(layout.mine_count(), mines);
            assert_eq!(layout.size(), size);
        }
    }

    #[test]
    fn same_seed_generates_the_same_layout() {
        let config = GameConfig::default();
        let first = RandomMineGenerator::new(42).generate(config);
        let second = RandomMineGenerator::new(42).generate(config);
        assert_eq!(first, second);
    }

    #[test]
    fn nearly_full_board_terminates() {
        let layout = RandomMineGenerator::new(0).generate(GameConfig::square(4, 15));
        assert_eq!(layout.mine_count(), 15);
        assert_eq!(layout.safe_cell_count(), 1);
    }

    #[test]
    fn overfull_request_is_clamped_to_the_board() {
        let layout = RandomMineGenerator::new(0).generate(GameConfig::square(2, 9));
        assert_eq!(layout.mine_count(), 4);
    }
}
