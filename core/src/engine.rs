use alloc::vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Ongoing,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// One game session: the board plus everything the player has done to it.
///
/// Rejected moves never change any state. Moves outside the board fail with
/// [`GameError::InvalidCoords`], moves after the game ended with
/// [`GameError::AlreadyEnded`], and moves that make no sense for the target cell
/// (revealing a flag, flagging a revealed cell) succeed with a `NoChange` outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    revealed: Array2<bool>,
    flagged: Array2<bool>,
    revealed_safe: CellCount,
    outcome: Outcome,
    triggered_mine: Option<Coord2>,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        let shape = (board.size(), board.size()).to_nd_index();
        Self {
            board,
            revealed: Array2::default(shape),
            flagged: Array2::default(shape),
            revealed_safe: 0,
            outcome: Outcome::default(),
            triggered_mine: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Signed board value at `coords`, regardless of whether it was revealed.
    pub fn value(&self, coords: Coord2) -> i8 {
        self.board.value(coords)
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[coords.to_nd_index()]
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.flagged[coords.to_nd_index()]
    }

    pub fn cell_view(&self, coords: Coord2) -> CellView {
        if self.is_revealed(coords) {
            CellView::Revealed(self.board[coords])
        } else if self.is_flagged(coords) {
            CellView::Flagged
        } else {
            CellView::Hidden
        }
    }

    /// Number of mines that are currently flagged. Wrong flags are not penalized.
    pub fn score(&self) -> CellCount {
        self.flagged
            .indexed_iter()
            .filter(|&((row, col), &flagged)| {
                flagged && self.board.is_mine((row as Coord, col as Coord))
            })
            .count() as CellCount
    }

    pub fn flag_count(&self) -> CellCount {
        self.flagged.iter().filter(|&&flagged| flagged).count() as CellCount
    }

    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.flag_count() as isize)
    }

    pub fn safe_cells_left(&self) -> CellCount {
        self.board.safe_cell_count() - self.revealed_safe
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_ongoing()?;

        if self.is_revealed(coords) {
            return Ok(MarkOutcome::NoChange);
        }

        let flag = &mut self.flagged[coords.to_nd_index()];
        *flag = !*flag;
        log::trace!("Flag at {:?} set to {}", coords, *flag);
        Ok(MarkOutcome::Changed)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_ongoing()?;

        if self.is_revealed(coords) || self.is_flagged(coords) {
            return Ok(RevealOutcome::NoChange);
        }

        if self.board.is_mine(coords) {
            log::debug!("Hit mine at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.revealed.fill(true);
            self.outcome = Outcome::Lost;
            return Ok(RevealOutcome::HitMine);
        }

        let opened = self.flood_reveal(coords);
        log::debug!(
            "Open cell at {:?}, mine count: {}, opened {} cells",
            coords,
            self.board.value(coords),
            opened
        );

        if self.revealed_safe == self.board.safe_cell_count() {
            log::debug!("All safe cells revealed, game won");
            self.outcome = Outcome::Won;
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Reveals `start` and, through zero cells, everything connected to it.
    /// Flagged cells stop the expansion. `start` must be a hidden safe cell.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut opened = 0;
        let mut pending = vec![start];

        while let Some(coords) = pending.pop() {
            if self.is_revealed(coords) || self.is_flagged(coords) {
                continue;
            }

            self.revealed[coords.to_nd_index()] = true;
            opened += 1;

            if self.board[coords].is_zero() {
                log::trace!("Expanding zero cell at {:?}", coords);
                pending.extend(
                    self.board
                        .neighbors(coords)
                        .filter(|&pos| !self.is_revealed(pos) && !self.is_flagged(pos)),
                );
            }
        }

        self.revealed_safe += opened;
        opened
    }

    fn check_ongoing(&self) -> Result<()> {
        if self.outcome.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
