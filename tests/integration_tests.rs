//! Integration tests for goban
//!
//! These drive the public API the way a host application would: through
//! `Game`, the encoded state string, and the text protocol.

use goban::board::{Board, Color, Intersection};
use goban::codec::{CodecError, decode, encode};
use goban::constants::KOMI;
use goban::game::Game;
use goban::protocol::Session;
use goban::rules::MoveError;
use goban::scoring::score;

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Play a sequence of moves, alternating colors starting with Black.
/// `None` passes. Panics if any move is illegal.
fn setup_game(size: usize, moves: &[Option<(usize, usize)>]) -> Game {
    let mut game = Game::new(size);
    for (i, mv) in moves.iter().enumerate() {
        match *mv {
            Some((x, y)) => {
                if let Err(e) = game.try_place(x, y) {
                    panic!("move {i} at ({x},{y}) rejected: {e}");
                }
            }
            None => {
                assert!(!game.pass_turn(), "move {i}: pass ended the game");
            }
        }
    }
    game
}

/// Build a random board with roughly a third of the points in each state.
fn random_board(rng: &mut fastrand::Rng, size: usize) -> Board {
    let mut board = Board::new(size);
    for x in 0..size {
        for y in 0..size {
            let v = match rng.u8(0..3) {
                0 => Intersection::Empty,
                1 => Intersection::Black,
                _ => Intersection::White,
            };
            board.set(x, y, v);
        }
    }
    board
}

// =============================================================================
// Capture tests
// =============================================================================

#[test]
fn test_capture_surrounded_center_stone() {
    // Black (2,2); White (1,2), (2,1), (3,2), (2,3) with Black passing between
    let game = setup_game(
        5,
        &[
            Some((2, 2)),
            Some((1, 2)),
            None,
            Some((2, 1)),
            None,
            Some((3, 2)),
            None,
            Some((2, 3)),
        ],
    );

    assert_eq!(game.board().get(2, 2), Some(Intersection::Empty));
    assert_eq!(game.board().stones(Color::White), 4);
    assert_eq!(game.board().stones(Color::Black), 0);
    assert_eq!(game.captures(Color::White), 1);
}

#[test]
fn test_capture_group_removes_exactly_that_group() {
    // White pair on the top edge at (0,0),(1,0); Black closes at (2,0)
    let mut game = setup_game(
        5,
        &[
            Some((0, 1)),
            Some((0, 0)),
            Some((1, 1)),
            Some((1, 0)),
            Some((4, 4)),
            Some((3, 3)),
        ],
    );
    assert_eq!(game.try_place(2, 0), Ok(2));

    let board = game.board();
    assert_eq!(board.get(0, 0), Some(Intersection::Empty));
    assert_eq!(board.get(1, 0), Some(Intersection::Empty));
    assert_eq!(board.get(3, 3), Some(Intersection::White));
    assert_eq!(board.stones(Color::White), 1);
    assert_eq!(board.stones(Color::Black), 4);
}

#[test]
fn test_capture_in_corner_is_not_suicide() {
    // White (0,0) with Black on (0,1); White also holds (2,0) and (1,1),
    // so Black's stone at (1,0) has no liberty of its own until it captures.
    let mut game = setup_game(
        5,
        &[Some((0, 1)), Some((0, 0)), Some((4, 4)), Some((2, 0)), Some((4, 3)), Some((1, 1))],
    );
    assert!(game.can_place(1, 0));
    assert_eq!(game.try_place(1, 0), Ok(1));
    assert_eq!(game.board().get(0, 0), Some(Intersection::Empty));
}

// =============================================================================
// Legality tests
// =============================================================================

#[test]
fn test_occupied_always_illegal() {
    let mut game = setup_game(9, &[Some((4, 4)), Some((3, 3))]);
    for (x, y) in [(4, 4), (3, 3)] {
        assert!(!game.can_place(x, y));
        assert_eq!(game.try_place(x, y), Err(MoveError::Occupied));
    }
    assert!(!game.pass_turn());
    for (x, y) in [(4, 4), (3, 3)] {
        assert!(!game.place(x, y));
    }
}

#[test]
fn test_suicide_rejected_and_state_unchanged() {
    // Black surrounds (2,2); White to move
    let mut game = setup_game(
        5,
        &[
            Some((1, 2)),
            Some((0, 0)),
            Some((3, 2)),
            Some((0, 4)),
            Some((2, 1)),
            Some((4, 0)),
            Some((2, 3)),
        ],
    );
    assert_eq!(game.turn(), Color::White);
    let before = game.get_board();
    let plies = game.history().len();

    assert_eq!(game.try_place(2, 2), Err(MoveError::Suicide));
    assert_eq!(game.get_board(), before);
    assert_eq!(game.history().len(), plies);
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn test_ko_recapture_rejected() {
    //   x: 0 1 2 3
    // y0   . B W .
    // y1   B W . W     <- White just took the black stone at (2,1)
    // y2   . B W .
    let mut game = setup_game(
        5,
        &[
            Some((1, 0)),
            Some((2, 0)),
            Some((0, 1)),
            Some((3, 1)),
            Some((1, 2)),
            Some((2, 2)),
            Some((2, 1)),
        ],
    );
    assert_eq!(game.try_place(1, 1), Ok(1));
    assert_eq!(game.board().get(2, 1), Some(Intersection::Empty));

    let before = game.get_board();
    assert!(!game.can_place(2, 1));
    assert_eq!(game.try_place(2, 1), Err(MoveError::Ko));
    assert_eq!(game.get_board(), before);

    // After an exchange elsewhere the recapture is allowed
    assert!(game.place(4, 4));
    assert!(game.place(4, 0));
    assert_eq!(game.try_place(2, 1), Ok(1));
    assert_eq!(game.board().get(1, 1), Some(Intersection::Empty));
}

#[test]
fn test_ko_lifts_after_pass_and_reply() {
    let mut game = setup_game(
        5,
        &[
            Some((1, 0)),
            Some((2, 0)),
            Some((0, 1)),
            Some((3, 1)),
            Some((1, 2)),
            Some((2, 2)),
            Some((2, 1)),
            Some((1, 1)),
        ],
    );
    assert!(!game.can_place(2, 1));
    assert!(!game.pass_turn()); // Black
    assert!(game.place(4, 4)); // White
    assert!(game.can_place(2, 1)); // Black
}

// =============================================================================
// Game flow tests
// =============================================================================

#[test]
fn test_two_passes_end_game() {
    let mut game = Game::new(9);
    assert!(!game.pass_turn(), "first pass must not end the game");
    assert!(!game.is_over());
    assert!(game.pass_turn(), "second pass ends the game");
    assert!(game.is_over());
    assert!(!game.place(0, 0));
}

#[test]
fn test_history_grows_one_entry_per_ply() {
    let mut game = Game::new(9);
    assert!(game.place(2, 2));
    assert!(!game.pass_turn());
    assert!(game.place(6, 6));
    assert!(!game.place(6, 6));

    let history = game.history();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0], "9b0");
    assert_eq!(history.last(), Some(&game.get_board()));

    let turns: Vec<Color> = history.iter().map(|s| decode(s).unwrap().turn).collect();
    assert_eq!(turns, vec![Color::Black, Color::White, Color::Black, Color::White]);
}

#[test]
fn test_get_turn_alternates() {
    let mut game = Game::new(9);
    assert_eq!(game.get_turn(), 0);
    assert!(game.place(0, 0));
    assert_eq!(game.get_turn(), 1);
    assert!(!game.pass_turn());
    assert_eq!(game.get_turn(), 0);
}

// =============================================================================
// Encoding tests
// =============================================================================

#[test]
fn test_empty_9x9_roundtrip() {
    let board = Board::new(9);
    let encoded = encode(9, Color::Black, &board).unwrap();
    let state = decode(&encoded).unwrap();
    assert_eq!(state.size, 9);
    assert_eq!(state.turn, Color::Black);
    assert!(state.board.points().all(|(_, v)| v.is_empty()));
}

#[test]
fn test_random_boards_roundtrip() {
    let mut rng = fastrand::Rng::with_seed(7);
    for size in [1, 2, 5, 9, 13, 19] {
        for _ in 0..10 {
            let board = random_board(&mut rng, size);
            let turn = if rng.bool() { Color::Black } else { Color::White };
            let state = decode(&encode(size, turn, &board).unwrap()).unwrap();
            assert_eq!(state.size, size);
            assert_eq!(state.turn, turn);
            assert_eq!(state.board, board);
        }
    }
}

#[test]
fn test_game_state_decodes_to_game_board() {
    let game = setup_game(9, &[Some((2, 3)), Some((3, 3)), Some((8, 8))]);
    let state = decode(&game.get_board()).unwrap();
    assert_eq!(state.size, 9);
    assert_eq!(state.turn, Color::White);
    assert_eq!(&state.board, game.board());
}

#[test]
fn test_decode_rejects_malformed() {
    assert_eq!(decode("19"), Err(CodecError::MissingTurnMarker));
    assert!(decode("9bxyz").is_err());
    assert!(matches!(decode("1b3"), Err(CodecError::PayloadOverflow(1))));
}

// =============================================================================
// Scoring tests
// =============================================================================

#[test]
fn test_empty_board_score() {
    let mut game = Game::new(9);
    game.pass_turn();
    game.pass_turn();
    let s = game.score();
    assert_eq!(s.black, 0.0);
    assert_eq!(s.white, KOMI);
    assert_eq!(s.neutral, 81);
    assert_eq!(s.winner, Color::White);
}

#[test]
fn test_area_totals_cover_board() {
    let mut rng = fastrand::Rng::with_seed(11);
    for size in [1, 3, 9, 19] {
        for _ in 0..10 {
            let board = random_board(&mut rng, size);
            let s = score(&board, KOMI);
            assert_eq!(s.black_area + s.white_area + s.neutral, size * size);
            assert_eq!(s.black, s.black_area as f64);
            assert_eq!(s.white, s.white_area as f64 + KOMI);
        }
    }
}

#[test]
fn test_score_after_capture_game() {
    let mut game = setup_game(
        5,
        &[
            Some((2, 2)),
            Some((1, 2)),
            None,
            Some((2, 1)),
            None,
            Some((3, 2)),
            None,
            Some((2, 3)),
        ],
    );
    assert!(!game.pass_turn());
    assert!(game.pass_turn());
    let s = game.score();
    // Every empty region touches only white stones
    assert_eq!(s.white_area, 25);
    assert_eq!(s.black_area, 0);
    assert_eq!(s.white, 25.0 + KOMI);
    assert_eq!(s.winner, Color::White);
}

#[test]
fn test_black_wins_with_more_area() {
    // Black wall at x=2, White wall at x=4 on a 7x7 board:
    // Black owns x=0..=2 (21), White owns x=4..=6 (21), x=3 is neutral (7)
    let mut board = Board::new(7);
    for y in 0..7 {
        board.set(2, y, Intersection::Black);
        board.set(4, y, Intersection::White);
    }
    let even = score(&board, KOMI);
    assert_eq!(even.black_area, 21);
    assert_eq!(even.white_area, 21);
    assert_eq!(even.neutral, 7);
    assert_eq!(even.winner, Color::White);

    for y in 0..7 {
        board.set(3, y, Intersection::Black);
    }
    let s = score(&board, KOMI);
    assert_eq!(s.black_area, 28);
    assert_eq!(s.winner, Color::Black);
}

// =============================================================================
// Protocol tests
// =============================================================================

fn run_session(session: &mut Session, script: &str) -> String {
    let mut out = Vec::new();
    session.run(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_protocol_game() {
    let mut session = Session::new(5, KOMI);
    let script = "\
# capture in the center
1 play 2 2
2 play 1 2
3 pass
4 play 2 1
5 pass
6 play 3 2
7 pass
8 play 2 3
9 turn
10 pass
11 pass
12 final_score
13 quit
14 name
";
    let out = run_session(&mut session, script);
    let responses: Vec<&str> = out.split("\n\n").filter(|s| !s.is_empty()).collect();
    assert_eq!(
        responses,
        vec![
            "=1 0",
            "=2 0",
            "=3 ",
            "=4 0",
            "=5 ",
            "=6 0",
            "=7 ",
            "=8 1",
            "=9 0",
            "=10 ",
            "=11 game over",
            "=12 white 0 31.5",
            "=13 ",
        ]
    );
}

#[test]
fn test_protocol_reports_illegal_moves() {
    let mut session = Session::new(9, KOMI);
    let out = run_session(&mut session, "play 0 0\nplay 0 0\nplay 9 9\nbogus\n");
    assert!(out.contains("? illegal move: point not empty"));
    assert!(out.contains("? illegal move: point is off the board"));
    assert!(out.contains("? unknown command: bogus"));
    assert_eq!(session.game().history().len(), 2);
}

#[test]
fn test_protocol_board_and_decode() {
    let mut session = Session::new(9, KOMI);
    let out = run_session(&mut session, "board\ndecode 2w3d\ndecode 2x\n");
    assert!(out.starts_with("= 9b0\n\n"));
    assert!(out.contains("size 2 to move white\nO O\n. X\n"));
    assert!(out.contains("? missing turn marker"));
}

#[test]
fn test_protocol_rejects_huge_board_sizes() {
    let mut session = Session::new(9, KOMI);
    let out = run_session(
        &mut session,
        "boardsize 4294967296\ndecode 4294967296b0\nboardsize 257\nboard\n",
    );
    let responses: Vec<&str> = out.split("\n\n").filter(|s| !s.is_empty()).collect();
    assert_eq!(
        responses,
        vec![
            "? unacceptable size",
            "? invalid board size \"4294967296\"",
            "? unacceptable size",
            "= 9b0",
        ]
    );
}
