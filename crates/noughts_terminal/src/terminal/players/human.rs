//! Human player reading row and column from the console.

use super::Player;
use crate::terminal::Console;
use anyhow::Result;
use noughts_engine::{EngineError, EngineErrorKind, Position, Round};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Human player using typed coordinates.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<R: BufRead, W: Write> Player<R, W> for HumanPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose(&mut self, _round: &Round, console: &mut Console<R, W>) -> Result<Position> {
        let row = console.ask_number("Row (1-3): ", 1..=3)?;
        let col = console.ask_number("Column (1-3): ", 1..=3)?;
        let position = Position::try_from_row_col(row - 1, col - 1)?;
        debug!(%position, "Human chose position");
        Ok(position)
    }

    fn rejected(&mut self, console: &mut Console<R, W>, error: EngineError) -> Result<()> {
        match error.kind {
            EngineErrorKind::CellOccupied(_) => console.line("That cell is already taken."),
            _ => Err(error.into()),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
