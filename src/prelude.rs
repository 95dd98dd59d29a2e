//! Commonly used types and utilities for ease of import.

pub use crate::{
    parse_guess, Board, Coordinate, DisplaySink, FireResult, GameSession, GameStatus,
    InvalidInput, Notification, Ship, BOARD_SIZE, NUM_SHIPS, SHIP_LENGTH,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ui::TerminalDisplay};
