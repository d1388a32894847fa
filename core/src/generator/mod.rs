use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}

/// How mines are distributed over the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinePlacement {
    /// Sample random cells until enough distinct ones are mined. Slows down as the board fills up.
    #[default]
    Rejection,
    /// Partial Fisher-Yates shuffle over all cell indices, linear in the board area.
    Shuffle,
}

/// Generates a board by rejection sampling with the given random source.
pub fn generate<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Board> {
    generate_with(config, MinePlacement::Rejection, rng)
}

pub fn generate_with<R: Rng>(
    config: GameConfig,
    placement: MinePlacement,
    rng: &mut R,
) -> Result<Board> {
    config.validate()?;

    let mut mine_mask: Array2<bool> = Array2::default((config.size, config.size).to_nd_index());
    match placement {
        MinePlacement::Rejection => place_by_rejection(&mut mine_mask, config, rng),
        MinePlacement::Shuffle => place_by_shuffle(&mut mine_mask, config, rng),
    }

    let board = Board::from_mine_mask(config.size, &mine_mask)?;
    if board.mine_count() != config.mines {
        log::warn!(
            "Generated board mine count mismatch, actual: {}, requested: {}",
            board.mine_count(),
            config.mines
        );
    }
    log::debug!(
        "Generated {}x{} board with {} mines ({:?})",
        config.size,
        config.size,
        board.mine_count(),
        placement
    );
    Ok(board)
}

fn place_by_rejection<R: Rng>(mine_mask: &mut Array2<bool>, config: GameConfig, rng: &mut R) {
    let mut placed = 0;
    while placed < config.mines {
        let coords: Coord2 = (
            rng.random_range(0..config.size),
            rng.random_range(0..config.size),
        );
        let cell = &mut mine_mask[coords.to_nd_index()];
        if !*cell {
            *cell = true;
            placed += 1;
        }
    }
}

fn place_by_shuffle<R: Rng>(mine_mask: &mut Array2<bool>, config: GameConfig, rng: &mut R) {
    let mut indices: Vec<CellCount> = (0..config.total_cells()).collect();
    let size = CellCount::from(config.size);

    for i in 0..config.mines {
        let pick = rng.random_range(i..config.total_cells());
        indices.swap(usize::from(i), usize::from(pick));

        let index = indices[usize::from(i)];
        let coords = ((index / size) as Coord, (index % size) as Coord);
        mine_mask[coords.to_nd_index()] = true;
    }
}
