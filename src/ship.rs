//! Ships: a straight line of cells plus a per-segment hit record.

use crate::bitboard::Grid;
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, SHIP_LENGTH};
use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship of `SHIP_LENGTH` segments. `hits[i]` records a strike on `locations[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    locations: [Coordinate; SHIP_LENGTH],
    hits: [bool; SHIP_LENGTH],
    orientation: Orientation,
}

impl Ship {
    /// Lay a ship out from the anchor (`row`, `col`), extending right when
    /// horizontal and down when vertical.
    pub fn new(orientation: Orientation, row: usize, col: usize) -> Result<Self, BoardError> {
        let fits = match orientation {
            Orientation::Horizontal => row < BOARD_SIZE && col + SHIP_LENGTH <= BOARD_SIZE,
            Orientation::Vertical => col < BOARD_SIZE && row + SHIP_LENGTH <= BOARD_SIZE,
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut locations = [Coordinate::new(row, col)?; SHIP_LENGTH];
        for (i, slot) in locations.iter_mut().enumerate() {
            *slot = match orientation {
                Orientation::Horizontal => Coordinate::new(row, col + i)?,
                Orientation::Vertical => Coordinate::new(row + i, col)?,
            };
        }
        Ok(Ship {
            locations,
            hits: [false; SHIP_LENGTH],
            orientation,
        })
    }

    /// Build a ship from explicit cells, in any order.
    pub fn from_locations(mut locations: [Coordinate; SHIP_LENGTH]) -> Result<Self, BoardError> {
        locations.sort();
        let first = locations[0];
        let orientation = if locations.iter().all(|c| c.row() == first.row()) {
            Orientation::Horizontal
        } else if locations.iter().all(|c| c.col() == first.col()) {
            Orientation::Vertical
        } else {
            return Err(BoardError::MalformedShip);
        };

        let contiguous = locations.iter().enumerate().all(|(i, c)| match orientation {
            Orientation::Horizontal => c.col() == first.col() + i,
            Orientation::Vertical => c.row() == first.row() + i,
        });
        if !contiguous {
            return Err(BoardError::MalformedShip);
        }
        Ship::new(orientation, first.row(), first.col())
    }

    pub fn locations(&self) -> &[Coordinate; SHIP_LENGTH] {
        &self.locations
    }

    pub fn hits(&self) -> &[bool; SHIP_LENGTH] {
        &self.hits
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Index of the segment at `at`, if the ship covers that cell.
    pub fn segment_at(&self, at: Coordinate) -> Option<usize> {
        self.locations.iter().position(|&c| c == at)
    }

    pub fn is_hit_at(&self, at: Coordinate) -> bool {
        self.segment_at(at).is_some_and(|i| self.hits[i])
    }

    /// Mark segment `index` struck. Returns `false` if it was already struck.
    pub(crate) fn strike(&mut self, index: usize) -> bool {
        !core::mem::replace(&mut self.hits[index], true)
    }

    /// A ship is sunk once every segment has been struck.
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&h| h)
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> Grid {
        let mut mask = Grid::new();
        for &c in &self.locations {
            mask.insert(c);
        }
        mask
    }
}
