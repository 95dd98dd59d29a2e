use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::prelude::*;
use seabattle::{victory_message, ALREADY_HIT_MESSAGE, HIT_MESSAGE, MISS_MESSAGE, SUNK_MESSAGE};

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

fn msg(text: &str) -> Notification {
    Notification::Message(text.to_string())
}

/// Three horizontal ships on rows a, c and e, starting at column 0.
fn striped_board() -> Board {
    let mut board = Board::new();
    for (i, row) in [0, 2, 4].into_iter().enumerate() {
        board
            .place(i, Ship::from_locations([at(row, 0), at(row, 1), at(row, 2)]).unwrap())
            .unwrap();
    }
    board
}

fn recording_session() -> GameSession<Vec<Notification>> {
    GameSession::with_board(striped_board(), Vec::new())
}

#[test]
fn test_invalid_guess_not_counted() {
    let mut session = recording_session();
    let out = session.process_guess("z9");

    assert_eq!(out.len(), 1);
    assert!(matches!(&out[0], Notification::Message(_)));
    assert_eq!(session.guess_count(), 0);

    session.process_guess("a");
    assert_eq!(session.guess_count(), 0);
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_miss_and_hit_notifications() {
    let mut session = recording_session();

    assert_eq!(
        session.process_guess("b5"),
        vec![msg(MISS_MESSAGE), Notification::MarkMiss(at(1, 5))]
    );
    assert_eq!(
        session.process_guess("A1"),
        vec![Notification::MarkHit(at(0, 1)), msg(HIT_MESSAGE)]
    );
    assert_eq!(session.process_guess("a1"), vec![msg(ALREADY_HIT_MESSAGE)]);
    assert_eq!(session.guess_count(), 3);
    assert_eq!(session.ships_sunk(), 0);
}

#[test]
fn test_sinking_reports_sunk() {
    let mut session = recording_session();
    session.process_guess("c0");
    session.process_guess("c1");
    assert_eq!(
        session.process_guess("c2"),
        vec![Notification::MarkHit(at(2, 2)), msg(HIT_MESSAGE), msg(SUNK_MESSAGE)]
    );
    assert_eq!(session.ships_sunk(), 1);
}

#[test]
fn test_victory_after_last_ship() {
    let mut session = recording_session();
    session.process_guess("g6");
    for guess in ["a0", "a1", "a2", "c0", "c1", "c2", "e0", "e1"] {
        session.process_guess(guess);
    }
    assert_eq!(session.status(), GameStatus::InProgress);

    let last = session.process_guess("e2");
    assert_eq!(last.last(), Some(&msg(&victory_message(10))));
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.ships_sunk(), NUM_SHIPS);
    assert_eq!(
        victory_message(10),
        "You sank all my battleships, in 10 guesses."
    );

    // Guesses after the win are still processed.
    session.process_guess("e2");
    assert_eq!(session.guess_count(), 11);
}

#[test]
fn test_victory_repeats_on_every_guess_after_win() {
    let mut session = recording_session();
    for guess in ["a0", "a1", "a2", "c0", "c1", "c2", "e0", "e1", "e2"] {
        session.process_guess(guess);
    }
    assert_eq!(session.status(), GameStatus::Won);

    assert_eq!(
        session.process_guess("e2"),
        vec![msg(ALREADY_HIT_MESSAGE), msg(&victory_message(10))]
    );
    assert_eq!(
        session.process_guess("g6"),
        vec![
            msg(MISS_MESSAGE),
            Notification::MarkMiss(at(6, 6)),
            msg(&victory_message(11))
        ]
    );
    // Rejected input is not a processed guess.
    assert_eq!(session.process_guess("zz").len(), 1);
    assert_eq!(session.ships_sunk(), NUM_SHIPS);
}

#[test]
fn test_sunk_message_wording() {
    assert_eq!(SUNK_MESSAGE, "You sank my Battleship!");
}

#[test]
fn test_sink_receives_returned_notifications() {
    let mut session = recording_session();
    let mut returned: Vec<Notification> = Vec::new();
    for guess in ["a0", "xx", "d3", "a0"] {
        returned.extend(session.process_guess(guess));
    }
    assert_eq!(session.sink(), &returned);
}

#[derive(Default)]
struct CountingSink {
    messages: usize,
    hits: Vec<Coordinate>,
    misses: Vec<Coordinate>,
}

impl DisplaySink for CountingSink {
    fn show_message(&mut self, _text: &str) {
        self.messages += 1;
    }

    fn mark_hit(&mut self, at: Coordinate) {
        self.hits.push(at);
    }

    fn mark_miss(&mut self, at: Coordinate) {
        self.misses.push(at);
    }
}

#[test]
fn test_borrowed_custom_sink() {
    let mut sink = CountingSink::default();
    {
        let mut session = GameSession::with_board(striped_board(), &mut sink);
        session.process_guess("e1");
        session.process_guess("f1");
        session.process_guess("??");
    }
    assert_eq!(sink.hits, vec![at(4, 1)]);
    assert_eq!(sink.misses, vec![at(5, 1)]);
    assert_eq!(sink.messages, 3);
}

#[test]
fn test_new_generates_full_fleet() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let session = GameSession::new(&mut rng, Vec::<Notification>::new()).unwrap();
    assert_eq!(session.board().ships().count(), NUM_SHIPS);
    assert_eq!(session.guess_count(), 0);
    assert!(session.into_sink().is_empty());
}
