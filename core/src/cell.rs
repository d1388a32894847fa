use serde::{Deserialize, Serialize};

/// Static content of a board cell, fixed at generation time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardCell {
    Mine,
    /// Safe cell with the number of adjacent mines.
    Clear(u8),
}

impl BoardCell {
    /// Signed encoding used by renderers: `-1` for a mine, otherwise the adjacent mine count.
    pub const fn value(self) -> i8 {
        match self {
            Self::Mine => -1,
            Self::Clear(count) => count as i8,
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Clear(0))
    }
}

impl Default for BoardCell {
    fn default() -> Self {
        Self::Clear(0)
    }
}

/// What the player is allowed to see of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(BoardCell),
}

impl CellView {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_encodes_mines_as_negative_one() {
        assert_eq!(BoardCell::Mine.value(), -1);
        assert_eq!(BoardCell::Clear(0).value(), 0);
        assert_eq!(BoardCell::Clear(8).value(), 8);
    }
}
