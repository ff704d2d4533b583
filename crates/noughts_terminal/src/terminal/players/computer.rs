//! Computer player backed by the engine's policies.

use super::Player;
use crate::terminal::Console;
use anyhow::Result;
use noughts_engine::{Difficulty, Mark, Position, Round, choose_move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Computer opponent at a fixed difficulty.
pub struct ComputerPlayer {
    name: String,
    mark: Mark,
    difficulty: Difficulty,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Creates a computer player; `seed` makes its random choices repeatable.
    #[instrument]
    pub fn new(mark: Mark, difficulty: Difficulty, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            name: format!("Computer ({})", difficulty),
            mark,
            difficulty,
            rng,
        }
    }
}

impl<R: BufRead, W: Write> Player<R, W> for ComputerPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose(&mut self, round: &Round, _console: &mut Console<R, W>) -> Result<Position> {
        let position = choose_move(
            round.board(),
            self.mark,
            self.mark.opponent(),
            self.difficulty,
            &mut self.rng,
        )?;
        debug!(%position, "Computer chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
