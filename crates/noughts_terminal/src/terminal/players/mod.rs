//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use super::Console;
use anyhow::Result;
use noughts_engine::{EngineError, Position, Round};

/// Trait for players that can make moves.
pub trait Player<R, W> {
    /// Gets a move from this player for the side to move in `round`.
    fn choose(&mut self, round: &Round, console: &mut Console<R, W>) -> Result<Position>;

    /// Called when the round refused the chosen move.
    ///
    /// Returning `Ok` asks the player to choose again; the default treats
    /// any refusal as fatal.
    fn rejected(&mut self, _console: &mut Console<R, W>, error: EngineError) -> Result<()> {
        Err(error.into())
    }

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
