//! Medium tier: single-ply tactics.
//!
//! The cascade is win now, block now, center then corners, then random.
//! Line scans follow [`LINES`] order, so the first qualifying line wins.

use super::random::random_move;
use crate::{Board, EngineError, EngineErrorKind, LINES, Mark, Position, Square};
use rand::Rng;
use tracing::{debug, instrument};

/// Positional preference once no tactic applies: center, then corners.
pub const PREFERRED_SQUARES: [Position; 5] = [
    Position::Center,
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
];

/// Finds the empty square completing a line where `mark` holds the other two.
pub fn complete_line(board: &Board, mark: Mark) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let mut held = 0;
        let mut open = None;
        for &pos in line {
            match board.square(pos) {
                Square::Empty => open = Some(pos),
                Square::Occupied(m) if m == mark => held += 1,
                Square::Occupied(_) => return None,
            }
        }
        if held == 2 { open } else { None }
    })
}

/// First empty square from [`PREFERRED_SQUARES`].
pub fn preferred_cell(board: &Board) -> Option<Position> {
    PREFERRED_SQUARES
        .iter()
        .copied()
        .find(|&pos| board.is_empty(pos))
}

/// Runs the medium-tier cascade for `ai` against `human`.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn heuristic_move<R: Rng + ?Sized>(
    board: &Board,
    ai: Mark,
    human: Mark,
    rng: &mut R,
) -> Result<Position, EngineError> {
    if board.is_full() {
        return Err(EngineError::new(EngineErrorKind::NoMoveAvailable));
    }

    if let Some(pos) = complete_line(board, ai) {
        debug!(position = %pos, "Completing own line");
        return Ok(pos);
    }
    if let Some(pos) = complete_line(board, human) {
        debug!(position = %pos, "Blocking opponent line");
        return Ok(pos);
    }
    if let Some(pos) = preferred_cell(board) {
        debug!(position = %pos, "Taking preferred square");
        return Ok(pos);
    }
    random_move(board, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_with(xs: &[usize], os: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in xs {
            board.place(Position::ALL[i], Mark::X).unwrap();
        }
        for &i in os {
            board.place(Position::ALL[i], Mark::O).unwrap();
        }
        board
    }

    #[test]
    fn test_complete_line_finds_gap_in_middle() {
        let board = board_with(&[0, 2], &[]);
        assert_eq!(complete_line(&board, Mark::X), Some(Position::TopCenter));
        assert_eq!(complete_line(&board, Mark::O), None);
    }

    #[test]
    fn test_complete_line_ignores_blocked_lines() {
        let board = board_with(&[0, 1], &[2]);
        assert_eq!(complete_line(&board, Mark::X), None);
    }

    #[test]
    fn test_complete_line_uses_table_order() {
        // X can finish the middle row, the left column or a diagonal; rows come first.
        let board = board_with(&[0, 3, 4], &[]);
        assert_eq!(complete_line(&board, Mark::X), Some(Position::MiddleRight));
    }

    #[test]
    fn test_win_beats_block() {
        let board = board_with(&[0, 1], &[3, 4]);
        let mut rng = StdRng::seed_from_u64(1);
        let pos = heuristic_move(&board, Mark::O, Mark::X, &mut rng).unwrap();
        assert_eq!(pos, Position::MiddleRight);
    }

    #[test]
    fn test_blocks_when_no_win() {
        let board = board_with(&[0, 1], &[4]);
        let mut rng = StdRng::seed_from_u64(1);
        let pos = heuristic_move(&board, Mark::O, Mark::X, &mut rng).unwrap();
        assert_eq!(pos, Position::TopRight);
    }

    #[test]
    fn test_prefers_center_then_corners() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty = Board::new();
        assert_eq!(
            heuristic_move(&empty, Mark::O, Mark::X, &mut rng).unwrap(),
            Position::Center
        );

        let board = board_with(&[4], &[]);
        assert_eq!(
            heuristic_move(&board, Mark::O, Mark::X, &mut rng).unwrap(),
            Position::TopLeft
        );
    }

    #[test]
    fn test_random_fallback_spreads_over_open_edges() {
        // X . O / O X X / X . O: center and corners taken, no line has an open pair.
        let board = board_with(&[0, 4, 5, 6], &[2, 3, 8]);
        assert_eq!(complete_line(&board, Mark::X), None);
        assert_eq!(complete_line(&board, Mark::O), None);
        assert_eq!(preferred_cell(&board), None);

        let mut picked = Vec::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pos = heuristic_move(&board, Mark::O, Mark::X, &mut rng).unwrap();
            assert!(board.is_empty(pos));
            if !picked.contains(&pos) {
                picked.push(pos);
            }
        }
        picked.sort();
        assert_eq!(picked, vec![Position::TopCenter, Position::BottomCenter]);
    }

    #[test]
    fn test_last_open_edge_is_forced() {
        // X O X / O X ? / O X O leaves only edges; X holds no open pair, O neither.
        let board = board_with(&[0, 2, 4, 7], &[1, 3, 6, 8]);
        let mut rng = StdRng::seed_from_u64(9);
        let pos = heuristic_move(&board, Mark::O, Mark::X, &mut rng).unwrap();
        assert_eq!(pos, Position::MiddleRight);
    }
}
