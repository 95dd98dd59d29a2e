//! Parsing of two-character guesses such as `b4`.

use crate::common::InvalidInput;
use crate::config::{BOARD_SIZE, ROW_LETTERS};
use crate::coordinate::Coordinate;

/// Parse a guess: a row letter (`a`-`g`, any case) followed by a column digit.
pub fn parse_guess(input: &str) -> Result<Coordinate, InvalidInput> {
    let mut chars = input.chars();
    let (row_ch, col_ch) = match (chars.next(), chars.next(), chars.next()) {
        (Some(r), Some(c), None) => (r, c),
        _ => {
            return Err(InvalidInput::WrongLength {
                found: input.chars().count(),
            })
        }
    };

    let lower = row_ch.to_ascii_lowercase();
    let row = ROW_LETTERS
        .iter()
        .position(|&l| l == lower)
        .ok_or(InvalidInput::UnknownRow(row_ch))?;

    let col = col_ch
        .to_digit(10)
        .ok_or(InvalidInput::NonNumericColumn(col_ch))? as usize;

    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(InvalidInput::OffBoard { row, col });
    }
    Coordinate::new(row, col).map_err(|_| InvalidInput::OffBoard { row, col })
}
