//! The 3x3 board.

use crate::{EngineError, EngineErrorKind, Mark, Position, Square};
use serde::{Deserialize, Serialize};

/// 3x3 tic-tac-toe board.
///
/// Marks are only ever written into empty squares through the public API;
/// [`Board::clear`] wipes the whole grid between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from raw squares, bypassing turn order.
    ///
    /// Useful for setting up positions; both marks may hold a line.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at zero-based `row` and `col`.
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> Result<Square, EngineError> {
        let pos = Position::try_from_row_col(row, col)?;
        Ok(self.square(pos))
    }

    /// Places `mark` at zero-based `row` and `col`.
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), EngineError> {
        let pos = Position::try_from_row_col(row, col)?;
        self.place(pos, mark)
    }

    /// Returns the square at a position.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Places `mark` at `pos`; the board is untouched if the square is taken.
    #[track_caller]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), EngineError> {
        if !self.is_empty(pos) {
            return Err(EngineError::new(EngineErrorKind::CellOccupied(pos)));
        }
        self.put(pos, mark);
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.square(pos) == Square::Empty
    }

    /// Checks if every square holds a mark.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Resets every square to empty.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Empty positions in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Unchecked write used by search; callers guarantee the square is empty.
    pub(crate) fn put(&mut self, pos: Position, mark: Mark) {
        debug_assert!(self.is_empty(pos));
        self.squares[pos.to_index()] = Square::Occupied(mark);
    }

    /// Undoes a search placement.
    pub(crate) fn vacate(&mut self, pos: Position) {
        debug_assert!(!self.is_empty(pos));
        self.squares[pos.to_index()] = Square::Empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-text grid, empty squares numbered 1-9.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_positions().len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        let err = board.get(3, 1).unwrap_err();
        assert_eq!(err.kind, EngineErrorKind::OutOfRange { row: 3, col: 1 });
    }

    #[test]
    fn test_set_then_get() {
        let mut board = Board::new();
        board.set(1, 2, Mark::O).unwrap();
        assert_eq!(board.get(1, 2).unwrap(), Square::Occupied(Mark::O));
        assert_eq!(board.square(Position::MiddleRight), Square::Occupied(Mark::O));
    }

    #[test]
    fn test_set_occupied_leaves_board_unchanged() {
        let mut board = Board::new();
        board.set(0, 0, Mark::X).unwrap();
        let before = board;

        let err = board.set(0, 0, Mark::O).unwrap_err();
        assert_eq!(err.kind, EngineErrorKind::CellOccupied(Position::TopLeft));
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X).unwrap();
        board.place(Position::TopLeft, Mark::O).unwrap();
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X).unwrap();
        assert_eq!(board.to_string(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }
}
