//! Round loop between two players.

use super::{Console, Player, ui};
use anyhow::Result;
use noughts_engine::{EngineErrorKind, Mark, Outcome, Round};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Orchestrates rounds between the X and O players.
pub struct Orchestrator<R, W> {
    round: Round,
    player_x: Box<dyn Player<R, W>>,
    player_o: Box<dyn Player<R, W>>,
}

impl<R: BufRead, W: Write> Orchestrator<R, W> {
    /// Creates an orchestrator with `first` to move in the opening round.
    pub fn new(
        player_x: Box<dyn Player<R, W>>,
        player_o: Box<dyn Player<R, W>>,
        first: Mark,
    ) -> Self {
        Self {
            round: Round::new(first),
            player_x,
            player_o,
        }
    }

    /// Plays the current round to the end and returns its outcome.
    ///
    /// The board is drawn before every turn and once more at the end.
    #[instrument(skip_all, fields(first = %self.round.to_move()))]
    pub fn run(&mut self, console: &mut Console<R, W>) -> Result<Outcome> {
        info!("Starting round");

        while !self.round.outcome().is_over() {
            ui::draw_board(console, self.round.board())?;

            let mover = self.round.to_move();
            let player = match mover {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            loop {
                let position = player.choose(&self.round, console)?;
                match self.round.play(position) {
                    Ok(outcome) => {
                        debug!(player = player.name(), %position, ?outcome, "Move applied");
                        break;
                    }
                    Err(e) if matches!(e.kind(), EngineErrorKind::CellOccupied(_)) => {
                        player.rejected(console, e)?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        ui::draw_board(console, self.round.board())?;
        let outcome = self.round.outcome();
        info!(?outcome, moves = self.round.history().len(), "Round finished");
        Ok(outcome)
    }

    /// Starts a fresh round with `first` to move.
    pub fn restart(&mut self, first: Mark) {
        self.round.reset(first);
    }
}
