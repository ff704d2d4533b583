//! Move-selection policies and the difficulty dispatcher.

mod heuristic;
mod random;
mod search;

pub use heuristic::{PREFERRED_SQUARES, complete_line, heuristic_move, preferred_cell};
pub use random::random_move;
pub use search::{SEARCH_ORDER, SearchStats, Searcher, best_move};

use crate::{Board, Difficulty, EngineError, Mark, Position};
use rand::Rng;
use tracing::{debug, instrument};

/// Picks the computer's next move for the given difficulty.
///
/// Easy plays a random empty square, Medium runs the tactical heuristic and
/// Hard runs the exhaustive search. Fails with `NoMoveAvailable` on a full
/// board.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    ai: Mark,
    human: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Position, EngineError> {
    let choice = match difficulty {
        Difficulty::Easy => random_move(board, rng)?,
        Difficulty::Medium => heuristic_move(board, ai, human, rng)?,
        Difficulty::Hard => best_move(board, ai, human)?,
    };
    debug!(%difficulty, position = %choice, "Computer chose move");
    Ok(choice)
}
