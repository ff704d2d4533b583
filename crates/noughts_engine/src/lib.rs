//! Noughts engine - tic-tac-toe rules and computer opponents.
//!
//! The engine owns everything that decides a game: the 3x3 board, outcome
//! evaluation, and the three move-selection policies behind the difficulty
//! tiers. It performs no I/O; callers hand it a board and get back a
//! validated position or an error.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of squares with checked placement
//! - **Rules**: win lines, draw detection, depth-adjusted terminal scoring
//! - **Policies**: random (easy), tactical heuristic (medium), alpha-beta
//!   search (hard), routed by [`choose_move`]
//! - **Round**: a single game with side to move, history and outcome
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Board, Difficulty, Mark, Position, choose_move};
//!
//! let mut board = Board::new();
//! board.place(Position::Center, Mark::X)?;
//!
//! let mut rng = rand::rng();
//! let reply = choose_move(&board, Mark::O, Mark::X, Difficulty::Hard, &mut rng)?;
//! assert!(board.is_empty(reply));
//! # Ok::<(), noughts_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod difficulty;
mod error;
mod policy;
mod position;
mod round;
mod rules;
mod types;

pub use board::Board;
pub use difficulty::Difficulty;
pub use error::{EngineError, EngineErrorKind};
pub use policy::{
    PREFERRED_SQUARES, SEARCH_ORDER, SearchStats, Searcher, best_move, choose_move,
    complete_line, heuristic_move, preferred_cell, random_move,
};
pub use position::Position;
pub use round::Round;
pub use rules::{
    LINES, WIN_SCORE, has_line, is_draw, is_full, is_terminal, outcome, terminal_score, winner,
};
pub use types::{Mark, Outcome, Square};
