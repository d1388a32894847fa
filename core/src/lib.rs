#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use input::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod input;
mod types;

/// Fixed parameters of a square board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    /// Classic 10x10 board with 10 mines.
    pub const fn classic() -> Self {
        Self::new_unchecked(10, 10)
    }

    /// At least one cell, and at least one of them safe.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            Err(GameError::EmptyBoard)
        } else if self.mines >= self.total_cells() {
            Err(GameError::TooManyMines)
        } else {
            Ok(())
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Immutable mine layout with precomputed adjacency counts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: Coord,
    cells: Array2<BoardCell>,
    mine_count: CellCount,
}

impl Board {
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::EmptyBoard);
        }

        let mut mine_mask: Array2<bool> = Array2::default((size, size).to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(size, &mine_mask)
    }

    /// Derives every clear cell's count from `mine_mask`, which must be `size` x `size`.
    pub(crate) fn from_mine_mask(size: Coord, mine_mask: &Array2<bool>) -> Result<Self> {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        GameConfig::new_unchecked(size, mine_count).validate()?;

        let cells = Array2::from_shape_fn((size, size).to_nd_index(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            if mine_mask[coords.to_nd_index()] {
                BoardCell::Mine
            } else {
                let adjacent = Neighbors::new(coords, size)
                    .filter(|pos| mine_mask[pos.to_nd_index()])
                    .count();
                BoardCell::Clear(adjacent as u8)
            }
        });

        Ok(Self {
            size,
            cells,
            mine_count,
        })
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size, self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size && coords.1 < self.size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    /// Panics if `coords` is out of range, like indexing.
    pub fn cell(&self, coords: Coord2) -> BoardCell {
        self[coords]
    }

    pub fn value(&self, coords: Coord2) -> i8 {
        self[coords].value()
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        Neighbors::new(coords, self.size)
    }
}

impl Index<Coord2> for Board {
    type Output = BoardCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
