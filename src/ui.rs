#![cfg(feature = "std")]

//! Terminal rendering of the game grid.

use std::io::{self, Write};

use crate::{
    board::Board,
    config::{BOARD_SIZE, ROW_LETTERS},
    coordinate::Coordinate,
    display::DisplaySink,
};

/// What the player has learned about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Unknown,
    Hit,
    Miss,
}

impl Mark {
    fn symbol(self) -> char {
        match self {
            Mark::Unknown => '.',
            Mark::Hit => 'X',
            Mark::Miss => 'o',
        }
    }
}

/// [`DisplaySink`] that prints messages to a writer and keeps the marked grid.
pub struct TerminalDisplay<W: Write> {
    out: W,
    marks: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    last_message: Option<String>,
}

impl TerminalDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            marks: [[Mark::Unknown; BOARD_SIZE]; BOARD_SIZE],
            last_message: None,
        }
    }

    pub fn mark(&self, at: Coordinate) -> Mark {
        self.marks[at.row()][at.col()]
    }

    /// The message area: the most recent message shown.
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Draw the grid of hits and misses.
    pub fn render(&mut self) -> io::Result<()> {
        write_header(&mut self.out)?;
        for (r, row) in self.marks.iter().enumerate() {
            write!(self.out, " {} ", ROW_LETTERS[r].to_ascii_uppercase())?;
            for mark in row {
                write!(self.out, " {}", mark.symbol())?;
            }
            writeln!(self.out)?;
        }
        writeln!(self.out, "    Legend: X=Hit  o=Miss  .=Unknown")?;
        self.out.flush()
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn show_message(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
        self.last_message = Some(text.to_string());
    }

    fn mark_hit(&mut self, at: Coordinate) {
        self.marks[at.row()][at.col()] = Mark::Hit;
    }

    fn mark_miss(&mut self, at: Coordinate) {
        self.marks[at.row()][at.col()] = Mark::Miss;
    }
}

/// Print the fleet layout, `S` for ship cells.
pub fn print_fleet<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    let mut cells = [['.'; BOARD_SIZE]; BOARD_SIZE];
    for (r, c) in board.ship_map().iter_set_bits() {
        cells[r][c] = 'S';
    }
    write_header(out)?;
    for (r, row) in cells.iter().enumerate() {
        write!(out, " {} ", ROW_LETTERS[r].to_ascii_uppercase())?;
        for ch in row {
            write!(out, " {}", ch)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "   ")?;
    for c in 0..BOARD_SIZE {
        write!(out, " {}", c)?;
    }
    writeln!(out)
}
