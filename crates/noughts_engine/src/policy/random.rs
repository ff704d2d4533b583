//! Easy tier: any empty square.

use crate::{Board, EngineError, EngineErrorKind, Position};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Picks an empty square uniformly at random.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Position, EngineError> {
    let open = board.empty_positions();
    let Some(&choice) = open.choose(rng) else {
        return Err(EngineError::new(EngineErrorKind::NoMoveAvailable));
    };
    debug!(position = %choice, open = open.len(), "Random square");
    Ok(choice)
}
