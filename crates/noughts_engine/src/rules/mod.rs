//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]: line detection, draw detection and the
//! depth-adjusted scoring used by search. Rules are kept apart from board
//! storage so every policy evaluates positions the same way.

pub mod draw;
pub mod score;
pub mod win;

pub use draw::{is_draw, is_full};
pub use score::{WIN_SCORE, is_terminal, terminal_score};
pub use win::{LINES, has_line, winner};

use crate::{Board, Outcome};
use tracing::instrument;

/// Round outcome for a board: a winner, a draw, or still ongoing.
#[instrument(skip(board), fields(board = %board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(mark) = winner(board) {
        Outcome::Win(mark)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
