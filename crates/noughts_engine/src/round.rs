//! A single round of tic-tac-toe.

use crate::{Board, EngineError, EngineErrorKind, Mark, Outcome, Position, has_line};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board, side to move and result of one round.
///
/// Moves alternate starting from the mark passed to [`Round::new`]. Once the
/// outcome is a win or a draw the round refuses further moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    history: Vec<Position>,
}

impl Round {
    /// Starts a round on an empty board with `first` to move.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            outcome: Outcome::Ongoing,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the positions played so far.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Plays `position` for the side to move and reports the new outcome.
    ///
    /// # Errors
    ///
    /// `RoundOver` if the round has ended, `CellOccupied` if the square is
    /// taken. The round is unchanged on error.
    #[instrument(skip(self), fields(mover = %self.to_move))]
    pub fn play(&mut self, position: Position) -> Result<Outcome, EngineError> {
        if self.outcome.is_over() {
            return Err(EngineError::new(EngineErrorKind::RoundOver));
        }

        let mover = self.to_move;
        self.board.place(position, mover)?;
        self.history.push(position);

        self.outcome = if has_line(&self.board, mover) {
            Outcome::Win(mover)
        } else if self.board.is_full() {
            Outcome::Draw
        } else {
            self.to_move = mover.opponent();
            Outcome::Ongoing
        };

        debug!(outcome = ?self.outcome, "Move applied");
        Ok(self.outcome)
    }

    /// Clears the board and starts over with `first` to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self, first: Mark) {
        self.board.clear();
        self.to_move = first;
        self.outcome = Outcome::Ongoing;
        self.history.clear();
    }
}
