//! Shared result and error types: fire outcomes, board errors, invalid guesses.

use core::fmt;

use crate::config::BOARD_SIZE;

/// Outcome of firing at one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum FireResult {
    /// The cell belongs to a ship segment that was already struck.
    AlreadyHit,
    /// The shot struck a fresh segment; `sunk` is set when it was the last one.
    Hit { sunk: bool },
    /// No ship occupies the cell.
    Miss,
}

/// Errors returned by ship construction and board placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Cell lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Ship slot index is out of range.
    InvalidIndex,
    /// Ship slot is already occupied.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship would extend past the edge of the board.
    ShipOutOfBounds,
    /// Locations are not a straight, contiguous line of distinct cells.
    MalformedShip,
    /// Random placement gave up after too many collisions.
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is off the board", row, col)
            }
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::MalformedShip => {
                write!(f, "Ship cells must form a straight unbroken line")
            }
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

impl core::error::Error for BoardError {}

/// Why a guess string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// Guess was not exactly two characters long.
    WrongLength { found: usize },
    /// First character is not one of the row letters.
    UnknownRow(char),
    /// Second character is not a digit.
    NonNumericColumn(char),
    /// Row or column falls outside the grid.
    OffBoard { row: usize, col: usize },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::WrongLength { .. } => {
                write!(f, "Oops, please enter a letter and a number on the board.")
            }
            InvalidInput::UnknownRow(ch) => {
                write!(f, "Oops, '{}' isn't a row on the board.", ch)
            }
            InvalidInput::NonNumericColumn(ch) => {
                write!(f, "Oops, '{}' isn't a column on the board.", ch)
            }
            InvalidInput::OffBoard { col, .. } => write!(
                f,
                "Oops, that's off the board (column {} is not in 0-{}).",
                col,
                BOARD_SIZE - 1
            ),
        }
    }
}

impl core::error::Error for InvalidInput {}
