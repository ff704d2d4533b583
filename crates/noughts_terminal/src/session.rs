//! Interactive session: setup, repeated rounds, score keeping.

use crate::settings::{FirstPlayer, Settings};
use crate::terminal::{ComputerPlayer, Console, HumanPlayer, Orchestrator, Player, ui};
use anyhow::Result;
use derive_getters::Getters;
use noughts_engine::{Difficulty, Mark, Outcome};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};

/// Running score across the rounds of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Rounds won by the human.
    human_wins: u32,
    /// Rounds won by the computer.
    ai_wins: u32,
    /// Drawn rounds.
    draws: u32,
}

impl ScoreTally {
    /// Counts a finished round; ongoing outcomes are ignored.
    #[instrument]
    pub fn record(&mut self, outcome: Outcome, human: Mark) {
        match outcome {
            Outcome::Win(mark) if mark == human => self.human_wins += 1,
            Outcome::Win(_) => self.ai_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => warn!("Ignoring unfinished round"),
        }
    }

    /// Rounds counted so far.
    pub fn rounds(&self) -> u32 {
        self.human_wins + self.ai_wins + self.draws
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Score: You {}  |  AI {}  |  Draws {}",
            self.human_wins, self.ai_wins, self.draws
        )
    }
}

/// A human-versus-computer session on one console.
pub struct Session<R, W> {
    console: Console<R, W>,
    settings: Settings,
    tally: ScoreTally,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session.
    pub fn new(console: Console<R, W>, settings: Settings) -> Self {
        Self {
            console,
            settings,
            tally: ScoreTally::default(),
        }
    }

    /// Settings in effect (after setup questions, once run).
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Consumes the session, returning its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Asks mark, difficulty and first player, overriding current settings.
    #[instrument(skip(self))]
    pub fn setup(&mut self) -> Result<()> {
        let mark = match self.console.ask_number("Play X (1) or O (2)? ", 1..=2)? {
            1 => Mark::X,
            _ => Mark::O,
        };
        let code = self
            .console
            .ask_number("Difficulty 0=Easy 1=Medium 2=Hard: ", 0..=2)?;
        let difficulty = Difficulty::from_code(code).unwrap_or_default();
        let first = if self.console.ask_yes_no("Do you start? 1=Yes 0=No: ")? {
            FirstPlayer::Human
        } else {
            FirstPlayer::Computer
        };

        self.settings = self
            .settings
            .with_human_mark(mark)
            .with_difficulty(difficulty)
            .with_first_player(first);
        info!(%mark, %difficulty, ?first, "Setup complete");
        Ok(())
    }

    /// Runs rounds until the human declines a replay; returns the final tally.
    ///
    /// The side moving first alternates between rounds.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<ScoreTally> {
        ui::banner(&mut self.console)?;
        if *self.settings.setup_prompts() {
            self.setup()?;
        }

        let human = *self.settings.human_mark();
        let computer = self.settings.computer_mark();
        let human_player: Box<dyn Player<R, W>> = Box::new(HumanPlayer::new("You"));
        let computer_player: Box<dyn Player<R, W>> = Box::new(ComputerPlayer::new(
            computer,
            *self.settings.difficulty(),
            *self.settings.seed(),
        ));
        let (player_x, player_o) = match human {
            Mark::X => (human_player, computer_player),
            Mark::O => (computer_player, human_player),
        };

        let mut first_player = *self.settings.first_player();
        let mark_for = |first: FirstPlayer| match first {
            FirstPlayer::Human => human,
            FirstPlayer::Computer => computer,
        };
        let mut orchestrator = Orchestrator::new(player_x, player_o, mark_for(first_player));

        loop {
            let outcome = orchestrator.run(&mut self.console)?;
            self.tally.record(outcome, human);

            let palette = self.console.palette();
            self.console
                .line(ui::outcome_message(outcome.winner(), human, palette))?;
            self.console.line(self.tally)?;

            if !self.console.ask_yes_no("Play again? 1=Yes 0=No: ")? {
                break;
            }
            first_player = first_player.toggle();
            info!(first = first_player.label(), "Starting next round");
            orchestrator.restart(mark_for(first_player));
        }

        self.console.line("Thanks for playing!")?;
        info!(rounds = self.tally.rounds(), tally = %self.tally, "Session over");
        Ok(self.tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut tally = ScoreTally::default();
        tally.record(Outcome::Win(Mark::O), Mark::O);
        tally.record(Outcome::Win(Mark::X), Mark::O);
        tally.record(Outcome::Draw, Mark::O);
        tally.record(Outcome::Ongoing, Mark::O);
        assert_eq!(*tally.human_wins(), 1);
        assert_eq!(*tally.ai_wins(), 1);
        assert_eq!(*tally.draws(), 1);
        assert_eq!(tally.rounds(), 3);
    }

    #[test]
    fn test_display() {
        let mut tally = ScoreTally::default();
        tally.record(Outcome::Draw, Mark::X);
        assert_eq!(tally.to_string(), "Score: You 0  |  AI 0  |  Draws 1");
    }
}
