//! Computer-versus-computer duels.

use noughts_engine::{Difficulty, EngineError, Mark, Outcome, Round, choose_move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Result of a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DuelReport {
    /// Difficulty playing X.
    pub x: Difficulty,
    /// Difficulty playing O.
    pub o: Difficulty,
    /// Rounds played.
    pub rounds: u32,
    /// Rounds won by X.
    pub x_wins: u32,
    /// Rounds won by O.
    pub o_wins: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl std::fmt::Display for DuelReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X ({}) {}  |  O ({}) {}  |  Draws {}  ({} rounds)",
            self.x, self.x_wins, self.o, self.o_wins, self.draws, self.rounds
        )
    }
}

/// Plays one round between two difficulties.
pub fn play_round(
    first: Mark,
    x: Difficulty,
    o: Difficulty,
    rng: &mut StdRng,
) -> Result<Outcome, EngineError> {
    let mut round = Round::new(first);
    while !round.outcome().is_over() {
        let mover = round.to_move();
        let difficulty = match mover {
            Mark::X => x,
            Mark::O => o,
        };
        let position = choose_move(round.board(), mover, mover.opponent(), difficulty, rng)?;
        round.play(position)?;
    }
    debug!(board = %round.board(), outcome = ?round.outcome(), "Duel round finished");
    Ok(round.outcome())
}

/// Plays `rounds` rounds, X moving first in even rounds and O in odd ones.
#[instrument]
pub fn run_duel(
    x: Difficulty,
    o: Difficulty,
    rounds: u32,
    seed: Option<u64>,
) -> Result<DuelReport, EngineError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut report = DuelReport {
        x,
        o,
        rounds,
        x_wins: 0,
        o_wins: 0,
        draws: 0,
    };

    for index in 0..rounds {
        let first = if index % 2 == 0 { Mark::X } else { Mark::O };
        match play_round(first, x, o, &mut rng)? {
            Outcome::Win(Mark::X) => report.x_wins += 1,
            Outcome::Win(Mark::O) => report.o_wins += 1,
            Outcome::Draw => report.draws += 1,
            Outcome::Ongoing => warn!(index, "Ignoring unfinished round"),
        }
    }

    info!(%report, "Duel finished");
    Ok(report)
}
