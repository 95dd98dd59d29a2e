use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, info};
use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, FireResult},
    coordinate::Coordinate,
    display::{DisplaySink, Notification},
    parser::parse_guess,
};

pub const ALREADY_HIT_MESSAGE: &str = "Oops, you already hit that location!";
pub const HIT_MESSAGE: &str = "HIT!";
pub const SUNK_MESSAGE: &str = "You sank my Battleship!";
pub const MISS_MESSAGE: &str = "You missed.";

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// One game: the fleet, the guess counter and the sink feedback goes to.
pub struct GameSession<S: DisplaySink> {
    board: Board,
    guess_count: usize,
    sink: S,
}

impl<S: DisplaySink> GameSession<S> {
    /// Start a game with a freshly generated fleet.
    pub fn new<R: Rng>(rng: &mut R, sink: S) -> Result<Self, BoardError> {
        let mut board = Board::new();
        board.generate_placements(rng)?;
        Ok(Self::with_board(board, sink))
    }

    /// Start a game against a prepared board.
    pub fn with_board(board: Board, sink: S) -> Self {
        Self {
            board,
            guess_count: 0,
            sink,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Valid guesses processed so far. Rejected input is not counted.
    pub fn guess_count(&self) -> usize {
        self.guess_count
    }

    pub fn ships_sunk(&self) -> usize {
        self.board.ships_sunk()
    }

    pub fn status(&self) -> GameStatus {
        if self.board.all_sunk() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Handle one raw guess. The notifications are forwarded to the sink in
    /// order and also returned.
    pub fn process_guess(&mut self, raw: &str) -> Vec<Notification> {
        let notifications = match parse_guess(raw) {
            Ok(at) => self.fire(at),
            Err(reason) => {
                debug!("rejected guess {:?}: {:?}", raw, reason);
                Vec::from([message(format!("{}", reason))])
            }
        };
        for n in &notifications {
            self.sink.notify(n);
        }
        notifications
    }

    fn fire(&mut self, at: Coordinate) -> Vec<Notification> {
        self.guess_count += 1;
        let result = self.board.fire(at);
        debug!("guess {} at {}: {:?}", self.guess_count, at, result);

        let mut out = Vec::new();
        match result {
            FireResult::AlreadyHit => out.push(message(ALREADY_HIT_MESSAGE.into())),
            FireResult::Miss => {
                out.push(message(MISS_MESSAGE.into()));
                out.push(Notification::MarkMiss(at));
            }
            FireResult::Hit { sunk } => {
                out.push(Notification::MarkHit(at));
                out.push(message(HIT_MESSAGE.into()));
                if sunk {
                    out.push(message(SUNK_MESSAGE.into()));
                }
            }
        }
        if self.board.all_sunk() {
            info!("fleet destroyed after {} guesses", self.guess_count);
            out.push(message(victory_message(self.guess_count)));
        }
        out
    }
}

/// Final message once the whole fleet is sunk.
pub fn victory_message(guesses: usize) -> String {
    format!("You sank all my battleships, in {} guesses.", guesses)
}

fn message(text: String) -> Notification {
    Notification::Message(text)
}
