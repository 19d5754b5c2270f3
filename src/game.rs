//! Game state: the caller-owned value a host drives ply by ply.
//!
//! A [`Game`] owns the board, the side to move, the board as it stood one
//! ply ago (for ko), the pass flag, and the history of encoded states.
//! Hosts see the position only through its encoded form.

use tracing::{debug, info, instrument};

use crate::board::{Board, Color, Intersection};
use crate::capture::resolve_captures;
use crate::codec::encode_board;
use crate::constants::KOMI;
use crate::rules::{MoveError, check_placement};
use crate::scoring::{Score, score};

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// Board before the most recent ply, compared against for ko.
    prior: Board,
    turn: Color,
    passed_last: bool,
    over: bool,
    komi: f64,
    /// Stones captured by Black and White.
    captures: [usize; 2],
    history: Vec<String>,
}

impl Game {
    /// Start a game on an empty `size`x`size` board with the default komi.
    pub fn new(size: usize) -> Self {
        Self::with_komi(size, KOMI)
    }

    pub fn with_komi(size: usize, komi: f64) -> Self {
        let board = Board::new(size);
        let turn = Color::Black;
        let history = vec![encode_board(turn, &board)];
        Self {
            prior: board.clone(),
            board,
            turn,
            passed_last: false,
            over: false,
            komi,
            captures: [0, 0],
            history,
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn komi(&self) -> f64 {
        self.komi
    }

    /// Change komi. Takes effect at the next call to [`Game::score`].
    pub fn set_komi(&mut self, komi: f64) {
        self.komi = komi;
    }

    /// The current encoded state.
    pub fn get_board(&self) -> String {
        encode_board(self.turn, &self.board)
    }

    /// 0 if Black is to move, 1 if White.
    pub fn get_turn(&self) -> u8 {
        self.turn.index()
    }

    /// Whether the previous ply was a pass.
    pub fn just_passed(&self) -> bool {
        self.passed_last
    }

    /// Whether two consecutive passes have ended the game.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Encoded states, one per completed ply, starting with the empty board.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Total stones captured by `color` so far.
    pub fn captures(&self, color: Color) -> usize {
        self.captures[color.index() as usize]
    }

    /// Whether the side to move may place at `(x, y)`. Never mutates.
    pub fn can_place(&self, x: usize, y: usize) -> bool {
        self.check(x, y).is_ok()
    }

    fn check(&self, x: usize, y: usize) -> Result<(), MoveError> {
        if self.over {
            return Err(MoveError::GameOver);
        }
        check_placement(&self.board, &self.prior, x, y, self.turn)
    }

    /// Place a stone for the side to move. Returns `false`, leaving the game
    /// untouched, if the move is illegal.
    pub fn place(&mut self, x: usize, y: usize) -> bool {
        self.try_place(x, y).is_ok()
    }

    /// Place a stone for the side to move, reporting why on failure.
    ///
    /// Returns the number of opposing stones captured.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_place(&mut self, x: usize, y: usize) -> Result<usize, MoveError> {
        if let Err(e) = self.check(x, y) {
            debug!(error = %e, "placement rejected");
            return Err(e);
        }

        self.prior = self.board.clone();
        self.board.set(x, y, Intersection::stone(self.turn));
        let captured = resolve_captures(&mut self.board, x, y);
        self.captures[self.turn.index() as usize] += captured;

        self.turn = self.turn.opponent();
        self.passed_last = false;
        self.history.push(self.get_board());
        debug!(captured, "stone placed");
        Ok(captured)
    }

    /// Pass the turn. Returns `true` when this is the second consecutive
    /// pass, which ends the game.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn pass_turn(&mut self) -> bool {
        if self.over {
            return true;
        }
        if self.passed_last {
            self.over = true;
            info!(plies = self.history.len() - 1, "game over after two passes");
            return true;
        }

        // A pass leaves the board as is, so nothing can recreate the prior.
        self.prior = self.board.clone();
        self.turn = self.turn.opponent();
        self.passed_last = true;
        self.history.push(self.get_board());
        false
    }

    /// Area score of the current board with this game's komi.
    pub fn score(&self) -> Score {
        let result = score(&self.board, self.komi);
        info!(
            winner = %result.winner,
            black = result.black,
            white = result.white,
            "scored"
        );
        result
    }
}
