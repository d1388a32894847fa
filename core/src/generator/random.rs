use super::*;
use rand::prelude::*;

/// Seeded, purely random generator. Dense boards are always placed by shuffling, whatever placement was asked for.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
    placement: MinePlacement,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64, placement: MinePlacement) -> Self {
        Self { seed, placement }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(seed, MinePlacement::default())
    }

    fn effective_placement(&self, config: GameConfig) -> MinePlacement {
        match self.placement {
            MinePlacement::Rejection if config.mines > config.total_cells() / 2 => {
                log::debug!(
                    "Board too dense for rejection sampling ({} of {}), fallback to shuffle",
                    config.mines,
                    config.total_cells()
                );
                MinePlacement::Shuffle
            }
            placement => placement,
        }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        let placement = self.effective_placement(config);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate_with(config, placement, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_board() {
        let config = GameConfig::new(16, 40).unwrap();

        let first = RandomBoardGenerator::from_seed(42).generate(config).unwrap();
        let second = RandomBoardGenerator::from_seed(42).generate(config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_differ() {
        let config = GameConfig::new(16, 40).unwrap();

        let boards: alloc::vec::Vec<_> = (0..4)
            .map(|seed| RandomBoardGenerator::from_seed(seed).generate(config).unwrap())
            .collect();

        assert!(boards.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn dense_boards_fall_back_to_shuffle() {
        let generator = RandomBoardGenerator::from_seed(1);

        assert_eq!(
            generator.effective_placement(GameConfig::new(4, 9).unwrap()),
            MinePlacement::Shuffle
        );
        assert_eq!(
            generator.effective_placement(GameConfig::new(4, 8).unwrap()),
            MinePlacement::Rejection
        );
    }

    #[test]
    fn nearly_full_board_keeps_one_safe_cell() {
        let config = GameConfig::new(8, 63).unwrap();
        let board = RandomBoardGenerator::from_seed(9).generate(config).unwrap();

        assert_eq!(board.mine_count(), 63);
        assert_eq!(board.safe_cell_count(), 1);
    }
}
