//! Depth-adjusted terminal scoring.

use super::win::has_line;
use crate::{Board, Mark};

/// Score of an immediate win for the maximizing side.
///
/// True scores stay within `[-WIN_SCORE, WIN_SCORE]`.
pub const WIN_SCORE: i32 = 10;

/// Scores a position from the AI's point of view.
///
/// `10 - depth` when `ai` holds a line, `depth - 10` when `human` does,
/// otherwise `0`. Subtracting the depth makes search prefer faster wins and
/// slower losses.
pub fn terminal_score(board: &Board, ai: Mark, human: Mark, depth: i32) -> i32 {
    if has_line(board, ai) {
        WIN_SCORE - depth
    } else if has_line(board, human) {
        depth - WIN_SCORE
    } else {
        0
    }
}

/// A position is terminal once someone holds a line or the board is full.
pub fn is_terminal(board: &Board, ai: Mark, human: Mark) -> bool {
    terminal_score(board, ai, human, 0) != 0 || board.is_full()
}
