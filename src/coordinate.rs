//! Board coordinates.

use core::fmt;

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, ROW_LETTERS};

/// A `(row, col)` cell on the board, always inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Checked constructor; both indices must be below `BOARD_SIZE`.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Coordinate {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).map(move |col| Coordinate {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

/// Formats as the guess that selects this cell, e.g. `C4`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = ROW_LETTERS[self.row()].to_ascii_uppercase();
        write!(f, "{}{}", letter, self.col)
    }
}
