#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod coordinate;
mod display;
mod game;
#[cfg(feature = "std")]
mod logging;
mod parser;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError, Grid, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use display::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use parser::*;
pub use ship::*;
