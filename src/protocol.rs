//! Line-oriented text protocol for driving a [`Game`] from a host process.
//!
//! The framing follows GTP: each command may carry a numeric id, lines
//! starting with `#` are ignored, and every response is `=` (success) or
//! `?` (failure) followed by the id, the message, and a blank line.
//! Board state crosses the boundary only in encoded form.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Start a new game on a `size`x`size` board (1 to 256)
//! - `clear_board` - Start a new game at the current size
//! - `komi <value>` - Set komi
//! - `play <x> <y>` / `play pass` - Place for the side to move, or pass
//! - `pass` - Pass for the side to move
//! - `can_place <x> <y>` - Legality query, `true` or `false`
//! - `liberties <x> <y>` - Liberty count of the group at a point
//! - `board` - Current encoded state
//! - `turn` - `0` if Black is to move, `1` if White
//! - `history` - Encoded states, one per line
//! - `decode <state>` - Render an encoded state as a grid
//! - `showboard` - Render the current board as a grid
//! - `final_score` - Winner and both scores once the game is over
//!
//! ## Example
//!
//! ```
//! use goban::protocol::Session;
//!
//! let mut session = Session::new(5, 6.5);
//! let mut out = Vec::new();
//! session.run("play 2 2\nboard\n".as_bytes(), &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("= 5w"));
//! ```

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::codec::decode;
use crate::constants::MAX_SIZE;
use crate::game::Game;
use crate::group::liberties;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "board",
    "boardsize",
    "can_place",
    "clear_board",
    "decode",
    "final_score",
    "history",
    "known_command",
    "komi",
    "liberties",
    "list_commands",
    "name",
    "pass",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "turn",
    "version",
];

/// A protocol session wrapping one game at a time.
pub struct Session {
    game: Game,
}

impl Session {
    pub fn new(size: usize, komi: f64) -> Self {
        Self {
            game: Game::with_komi(size, komi),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// responses to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            if !success {
                debug!(%command, %message, "command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    fn parse_point(args: &[&str]) -> Result<(usize, usize), String> {
        match args {
            [x, y, ..] => {
                let x = x.parse::<usize>().map_err(|_| format!("invalid x {x:?}"))?;
                let y = y.parse::<usize>().map_err(|_| format!("invalid y {y:?}"))?;
                Ok((x, y))
            }
            _ => Err("missing arguments".to_string()),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "boardsize" => match args.first().map(|s| s.parse::<usize>()) {
                Some(Ok(size)) if (1..=MAX_SIZE).contains(&size) => {
                    self.game = Game::with_komi(size, self.game.komi());
                    (true, String::new())
                }
                Some(_) => (false, "unacceptable size".to_string()),
                None => (false, "missing argument".to_string()),
            },

            "clear_board" => {
                self.game = Game::with_komi(self.game.size(), self.game.komi());
                (true, String::new())
            }

            "komi" => match args.first().map(|s| s.parse::<f64>()) {
                Some(Ok(komi)) if komi.is_finite() => {
                    self.game.set_komi(komi);
                    (true, String::new())
                }
                Some(_) => (false, "invalid komi".to_string()),
                None => (false, "missing argument".to_string()),
            },

            "play" => {
                if args.first().is_some_and(|a| a.eq_ignore_ascii_case("pass")) {
                    return self.execute("pass", &[]);
                }
                let (x, y) = match Self::parse_point(args) {
                    Ok(pt) => pt,
                    Err(e) => return (false, e),
                };
                match self.game.try_place(x, y) {
                    Ok(captured) => (true, captured.to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "pass" => {
                if self.game.is_over() {
                    return (false, "game is over".to_string());
                }
                let ended = self.game.pass_turn();
                (true, if ended { "game over" } else { "" }.to_string())
            }

            "can_place" => match Self::parse_point(args) {
                Ok((x, y)) => (true, self.game.can_place(x, y).to_string()),
                Err(e) => (false, e),
            },

            "liberties" => match Self::parse_point(args) {
                Ok((x, y)) => (true, liberties(self.game.board(), x, y).to_string()),
                Err(e) => (false, e),
            },

            "board" => (true, self.game.get_board()),

            "turn" => (true, self.game.get_turn().to_string()),

            "history" => (true, self.game.history().join("\n")),

            "showboard" => {
                let grid = self.game.board().to_string();
                (true, format!("\n{}", grid.trim_end_matches('\n')))
            }

            "decode" => match args.first().map(|s| decode(s)) {
                Some(Ok(state)) => {
                    let grid = state.board.to_string();
                    (
                        true,
                        format!(
                            "\nsize {} to move {}\n{}",
                            state.size,
                            state.turn,
                            grid.trim_end_matches('\n')
                        ),
                    )
                }
                Some(Err(e)) => (false, e.to_string()),
                None => (false, "missing argument".to_string()),
            },

            "final_score" => {
                if !self.game.is_over() {
                    return (false, "game is not over".to_string());
                }
                let s = self.game.score();
                (true, format!("{} {} {}", s.winner, s.black, s.white))
            }

            _ => {
                warn!(%command, "unknown command");
                (false, format!("unknown command: {command}"))
            }
        }
    }
}
