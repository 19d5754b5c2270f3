//! Goban: the rules engine for the game of Go.
//!
//! This crate holds board state, move legality (liberties, suicide, ko),
//! group capture, area scoring, and a compact text encoding of a position.
//! Hosts (a UI, a player program, a future network layer) drive a
//! [`game::Game`] and read the position back only as an encoded string.
//!
//! ## Modules
//!
//! - [`constants`] - Komi, default size, neighbour order, codec markers
//! - [`board`] - Board storage and bounds checking
//! - [`group`] - Groups, liberties, and connected regions
//! - [`rules`] - Move legality
//! - [`capture`] - Removing dead groups after a placement
//! - [`scoring`] - Area scoring with komi
//! - [`codec`] - Encoded board states
//! - [`game`] - Game state driven by the host
//! - [`protocol`] - Text protocol over any reader/writer pair
//!
//! ## Example
//!
//! ```
//! use goban::game::Game;
//!
//! let mut game = Game::new(9);
//! assert!(game.place(4, 4));
//! assert!(!game.place(4, 4));
//!
//! assert!(!game.pass_turn());
//! assert!(game.pass_turn());
//!
//! let score = game.score();
//! println!("{} wins {} to {}", score.winner, score.black, score.white);
//! ```

pub mod board;
pub mod capture;
pub mod codec;
pub mod constants;
pub mod game;
pub mod group;
pub mod protocol;
pub mod rules;
pub mod scoring;
