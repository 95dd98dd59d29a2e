//! The fleet: ship placement, collision checks and fire resolution.

use core::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::bitboard::Grid;
use crate::common::{BoardError, FireResult};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS, SHIP_LENGTH};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Board state: ship slots plus hit, miss and occupancy masks.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    ships: [Option<Ship>; NUM_SHIPS],
    ship_map: Grid,
    hits: Grid,
    misses: Grid,
    ships_sunk: usize,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: Grid::new(),
            hits: Grid::new(),
            misses: Grid::new(),
            ships_sunk: 0,
        }
    }

    /// Placed ships, skipping empty slots.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    /// Ship in slot `index`, if placed.
    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index).and_then(Option::as_ref)
    }

    /// Number of ships fully sunk so far.
    pub fn ships_sunk(&self) -> usize {
        self.ships_sunk
    }

    /// Returns `true` when every ship of the fleet is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships_sunk == NUM_SHIPS
    }

    /// Occupancy mask of all placed ships.
    pub fn ship_map(&self) -> Grid {
        self.ship_map
    }

    pub fn hits(&self) -> Grid {
        self.hits
    }

    pub fn misses(&self) -> Grid {
        self.misses
    }

    /// True iff any cell of `candidate` is already occupied by a placed ship.
    pub fn collides(&self, candidate: &[Coordinate]) -> bool {
        candidate.iter().any(|&c| self.ship_map.contains(c))
    }

    /// Put `ship` into slot `index`.
    pub fn place(&mut self, index: usize, ship: Ship) -> Result<(), BoardError> {
        let slot = self.ships.get_mut(index).ok_or(BoardError::InvalidIndex)?;
        if slot.is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let mask = ship.mask();
        if self.ship_map.overlaps(&mask) {
            return Err(BoardError::ShipOverlaps);
        }
        self.ship_map |= mask;
        *slot = Some(ship);
        debug!("placed ship {} at {:?}", index, ship.locations());
        Ok(())
    }

    /// A random ship that fits on the board and collides with nothing placed.
    pub fn random_placement<R: Rng>(&self, rng: &mut R) -> Result<Ship, BoardError> {
        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let max_r = match orient {
                Orientation::Vertical => BOARD_SIZE - SHIP_LENGTH,
                Orientation::Horizontal => BOARD_SIZE - 1,
            };
            let max_c = match orient {
                Orientation::Horizontal => BOARD_SIZE - SHIP_LENGTH,
                Orientation::Vertical => BOARD_SIZE - 1,
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let ship = Ship::new(orient, r, c)?;
            if !self.collides(ship.locations()) {
                return Ok(ship);
            }
            trace!("placement attempt {} collided", attempt);
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Fill every empty slot with a random, non-overlapping ship.
    pub fn generate_placements<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for index in 0..NUM_SHIPS {
            if self.ships[index].is_none() {
                let ship = self.random_placement(rng)?;
                self.place(index, ship)?;
            }
        }
        Ok(())
    }

    /// Fire at `at`, recording the strike against whichever ship covers it.
    pub fn fire(&mut self, at: Coordinate) -> FireResult {
        let target = self
            .ships
            .iter_mut()
            .flatten()
            .find_map(|s| s.segment_at(at).map(|i| (s, i)));
        let Some((ship, index)) = target else {
            self.misses.insert(at);
            trace!("{} missed", at);
            return FireResult::Miss;
        };

        if !ship.strike(index) {
            return FireResult::AlreadyHit;
        }
        self.hits.insert(at);

        let sunk = ship.is_sunk();
        if sunk {
            self.ships_sunk += 1;
            debug!("{} sank a ship ({}/{} sunk)", at, self.ships_sunk, NUM_SHIPS);
        }
        FireResult::Hit { sunk }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  sunk: {},\n  ships: {:?}\n}}",
            self.ship_map, self.hits, self.misses, self.ships_sunk, self.ships
        )
    }
}
