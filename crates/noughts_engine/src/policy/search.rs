//! Hard tier: exhaustive minimax with alpha-beta pruning.
//!
//! The whole game tree from the current position is explored, so the chosen
//! move is optimal. Leaves are scored by [`terminal_score`], which favors
//! faster wins and slower losses.
//!
//! Search runs on a scratch copy of the caller's board. Each branch places a
//! mark, recurses, and vacates the square before the next sibling is tried,
//! so no branch observes another's placements.

use crate::{Board, EngineError, EngineErrorKind, Mark, Position, WIN_SCORE, terminal_score};
use tracing::{debug, instrument};

/// Root candidate order: center, corners, then edges.
///
/// Good moves first tightens the alpha-beta window early. Among moves with
/// equal score the earliest in this order is played.
pub const SEARCH_ORDER: [Position; 9] = [
    Position::Center,
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
    Position::TopCenter,
    Position::MiddleLeft,
    Position::MiddleRight,
    Position::BottomCenter,
];

/// Window sentinel; true scores stay within +/- [`WIN_SCORE`].
const INF: i32 = 100;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions evaluated, root children included.
    pub nodes: u64,
    /// Branches abandoned because `beta <= alpha`.
    pub cutoffs: u64,
}

/// Minimax searcher for one AI/human pairing.
#[derive(Debug, Clone)]
pub struct Searcher {
    ai: Mark,
    human: Mark,
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher maximizing for `ai`.
    pub fn new(ai: Mark, human: Mark) -> Self {
        Self {
            ai,
            human,
            stats: SearchStats::default(),
        }
    }

    /// Statistics accumulated since creation.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Scores `board` by exhaustive search.
    ///
    /// `maximizing` is true when the AI is to move. `depth` counts plies
    /// below the root move. The board is restored before returning.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        let score = terminal_score(board, self.ai, self.human, depth);
        if score != 0 || board.is_full() {
            return score;
        }

        if maximizing {
            let mut best = -INF;
            for pos in Position::ALL {
                if !board.is_empty(pos) {
                    continue;
                }
                board.put(pos, self.ai);
                let value = self.search(board, depth + 1, false, alpha, beta);
                board.vacate(pos);

                best = best.max(value);
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for pos in Position::ALL {
                if !board.is_empty(pos) {
                    continue;
                }
                board.put(pos, self.human);
                let value = self.search(board, depth + 1, true, alpha, beta);
                board.vacate(pos);

                best = best.min(value);
                beta = beta.min(best);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    /// Returns the best move for the AI, trying candidates in [`SEARCH_ORDER`].
    ///
    /// Only a strictly better score displaces the incumbent, and an
    /// immediate win ends the scan. `board` itself is never modified.
    pub fn best_move(&mut self, board: &Board) -> Result<Position, EngineError> {
        let mut scratch = *board;
        let mut best: Option<(Position, i32)> = None;

        for pos in SEARCH_ORDER {
            if !scratch.is_empty(pos) {
                continue;
            }
            scratch.put(pos, self.ai);
            let score = self.search(&mut scratch, 0, false, -INF, INF);
            scratch.vacate(pos);

            if best.is_none_or(|(_, incumbent)| score > incumbent) {
                best = Some((pos, score));
                if score == WIN_SCORE {
                    break;
                }
            }
        }

        best.map(|(pos, _)| pos)
            .ok_or_else(|| EngineError::new(EngineErrorKind::NoMoveAvailable))
    }
}

/// Picks a provably optimal move for `ai`.
///
/// Fails with `NoMoveAvailable` on a full board.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, ai: Mark, human: Mark) -> Result<Position, EngineError> {
    let mut searcher = Searcher::new(ai, human);
    let pos = searcher.best_move(board)?;
    let stats = searcher.stats();
    debug!(
        position = %pos,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "Search complete"
    );
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_restores_board() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X).unwrap();
        let before = board;

        let mut searcher = Searcher::new(Mark::O, Mark::X);
        let value = searcher.search(&mut board, 0, true, -INF, INF);

        assert_eq!(board, before);
        assert_eq!(value, 0, "perfect play from here is a draw");
        assert!(searcher.stats().nodes > 1);
    }

    #[test]
    fn test_pruning_happens() {
        let mut searcher = Searcher::new(Mark::X, Mark::O);
        searcher.best_move(&Board::new()).unwrap();
        let stats = searcher.stats();
        assert!(stats.cutoffs > 0);
        // Unpruned tree from the empty board has 549,946 nodes.
        assert!(stats.nodes < 549_946);
    }

    #[test]
    fn test_immediate_win_short_circuits() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::O).unwrap();
        board.place(Position::BottomLeft, Mark::O).unwrap();
        board.place(Position::TopRight, Mark::X).unwrap();
        board.place(Position::BottomRight, Mark::X).unwrap();

        let mut searcher = Searcher::new(Mark::O, Mark::X);
        assert_eq!(searcher.best_move(&board).unwrap(), Position::MiddleLeft);
    }

    #[test]
    fn test_full_board_has_no_move() {
        use Mark::{O, X};
        let board = Board::from_squares([X, O, X, O, X, X, O, X, O].map(crate::Square::Occupied));
        let err = best_move(&board, O, X).unwrap_err();
        assert_eq!(err.kind, EngineErrorKind::NoMoveAvailable);
    }
}
