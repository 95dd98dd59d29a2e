//! Fixed game rules.

pub const BOARD_SIZE: usize = 7;
pub const NUM_SHIPS: usize = 3;
pub const SHIP_LENGTH: usize = 3;

/// Row labels, one per board row, in lower case.
pub const ROW_LETTERS: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g'];

/// Upper bound on random placement attempts for a single ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 200;
