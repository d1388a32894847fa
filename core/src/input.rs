//! Pointer handling for presentation shells.
//!
//! A shell draws the board as square cells of a fixed pixel size, so pointer
//! positions map to `(row, col)` by integer division. Primary clicks reveal,
//! secondary clicks toggle flags, and nothing is processed once the game ended.

use serde::{Deserialize, Serialize};

use crate::*;

/// Pixel position relative to the top-left corner of the board surface.
pub type PixelPos = (u32, u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGeometry {
    pub cell_size: u32,
}

impl CellGeometry {
    pub const CLASSIC: Self = Self { cell_size: 40 };

    pub const fn new(cell_size: u32) -> Self {
        Self { cell_size }
    }

    /// Side length in pixels of the surface needed to draw a board.
    pub const fn surface_size(&self, board_size: Coord) -> u32 {
        self.cell_size.saturating_mul(board_size as u32)
    }

    pub fn cell_at(&self, board_size: Coord, (x, y): PixelPos) -> Option<Coord2> {
        if self.cell_size == 0 {
            return None;
        }
        let row = Coord::try_from(y / self.cell_size).ok()?;
        let col = Coord::try_from(x / self.cell_size).ok()?;
        (row < board_size && col < board_size).then_some((row, col))
    }
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    Ignored,
    Revealed(RevealOutcome),
    Marked(MarkOutcome),
}

impl InputOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Ignored => false,
            Self::Revealed(outcome) => outcome.has_update(),
            Self::Marked(outcome) => outcome.has_update(),
        }
    }
}

impl GameState {
    pub fn handle_pointer(
        &mut self,
        geometry: CellGeometry,
        pos: PixelPos,
        button: PointerButton,
    ) -> Result<InputOutcome> {
        if self.is_finished() {
            return Ok(InputOutcome::Ignored);
        }

        let coords = geometry
            .cell_at(self.size(), pos)
            .ok_or(GameError::InvalidCoords)?;
        log::trace!("{:?} pointer at {:?} -> cell {:?}", button, pos, coords);

        Ok(match button {
            PointerButton::Primary => InputOutcome::Revealed(self.reveal(coords)?),
            PointerButton::Secondary => InputOutcome::Marked(self.toggle_flag(coords)?),
            PointerButton::Other => InputOutcome::Ignored,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_game() -> GameState {
        GameState::new(Board::from_mine_coords(10, &[(0, 0), (9, 9)]).unwrap())
    }

    #[test]
    fn pointer_maps_to_row_and_column() {
        let geometry = CellGeometry::CLASSIC;

        assert_eq!(geometry.cell_at(10, (0, 0)), Some((0, 0)));
        assert_eq!(geometry.cell_at(10, (39, 41)), Some((1, 0)));
        assert_eq!(geometry.cell_at(10, (125, 80)), Some((2, 3)));
        assert_eq!(geometry.cell_at(10, (399, 399)), Some((9, 9)));
        assert_eq!(geometry.cell_at(10, (400, 0)), None);
        assert_eq!(geometry.surface_size(10), 400);
    }

    #[test]
    fn degenerate_geometry_maps_nothing() {
        assert_eq!(CellGeometry::new(0).cell_at(10, (5, 5)), None);
        assert_eq!(CellGeometry::new(1).cell_at(10, (u32::MAX, 0)), None);
    }

    #[test]
    fn buttons_route_to_moves() {
        let mut state = classic_game();
        let geometry = CellGeometry::default();

        let flagged = state
            .handle_pointer(geometry, (10, 10), PointerButton::Secondary)
            .unwrap();
        assert_eq!(flagged, InputOutcome::Marked(MarkOutcome::Changed));
        assert!(state.is_flagged((0, 0)));
        assert_eq!(state.score(), 1);

        let ignored = state
            .handle_pointer(geometry, (200, 200), PointerButton::Other)
            .unwrap();
        assert_eq!(ignored, InputOutcome::Ignored);
        assert!(!ignored.has_update());

        let revealed = state
            .handle_pointer(geometry, (200, 200), PointerButton::Primary)
            .unwrap();
        assert_eq!(revealed, InputOutcome::Revealed(RevealOutcome::Won));
    }

    #[test]
    fn off_board_pointer_is_invalid() {
        let mut state = classic_game();

        assert_eq!(
            state.handle_pointer(CellGeometry::CLASSIC, (0, 800), PointerButton::Primary),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn input_stops_after_game_ends() {
        let mut state = classic_game();
        let geometry = CellGeometry::CLASSIC;

        let lost = state
            .handle_pointer(geometry, (5, 5), PointerButton::Primary)
            .unwrap();
        assert_eq!(lost, InputOutcome::Revealed(RevealOutcome::HitMine));

        let after = state
            .handle_pointer(geometry, (200, 200), PointerButton::Secondary)
            .unwrap();
        assert_eq!(after, InputOutcome::Ignored);
        assert!(!state.is_flagged((5, 5)));
        assert_eq!(state.outcome(), Outcome::Lost);
    }
}
