//! Command-line interface for noughts.

use crate::settings::{ColorMode, FirstPlayer, Settings};
use clap::{Args, Parser, Subcommand};
use noughts_engine::{Difficulty, Mark};
use std::path::PathBuf;
use tracing::instrument;

/// Noughts - tic-tac-toe against a computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against the computer in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer
    Play(PlayArgs),

    /// Let two computer players face each other and report the tally
    Duel(DuelArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Play(PlayArgs::default())
    }
}

/// Options for an interactive session.
#[derive(Args, Debug, Default, Clone)]
pub struct PlayArgs {
    /// Settings file (TOML); defaults to ./noughts.toml when present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Mark to play (x or o)
    #[arg(short, long)]
    pub mark: Option<Mark>,

    /// Computer difficulty (easy, medium, hard or 0-2)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Who moves first in the opening round
    #[arg(long, value_enum)]
    pub first: Option<FirstPlayer>,

    /// When to use colors and screen clearing
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Skip the interactive setup questions
    #[arg(long)]
    pub no_setup: bool,

    /// Seed for reproducible computer moves
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PlayArgs {
    /// Overrides file settings with whatever was given on the command line.
    #[instrument(skip(self))]
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(mark) = self.mark {
            settings = settings.with_human_mark(mark);
        }
        if let Some(difficulty) = self.difficulty {
            settings = settings.with_difficulty(difficulty);
        }
        if let Some(first) = self.first {
            settings = settings.with_first_player(first);
        }
        if let Some(color) = self.color {
            settings = settings.with_color(color);
        }
        if self.no_setup {
            settings = settings.with_setup_prompts(false);
        }
        if self.seed.is_some() {
            settings = settings.with_seed(self.seed);
        }
        settings
    }
}

/// Options for a computer-versus-computer duel.
#[derive(Args, Debug, Clone)]
pub struct DuelArgs {
    /// Difficulty of the X player
    #[arg(short = 'x', long, default_value = "hard")]
    pub x: Difficulty,

    /// Difficulty of the O player
    #[arg(short = 'o', long, default_value = "medium")]
    pub o: Difficulty,

    /// Number of rounds; the first move alternates between rounds
    #[arg(short, long, default_value = "100")]
    pub rounds: u32,

    /// Seed for reproducible random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Play(_)));
    }

    #[test]
    fn test_play_flags_override_settings() {
        let cli = Cli::try_parse_from([
            "noughts", "play", "--mark", "o", "-d", "2", "--first", "computer", "--no-setup",
            "--seed", "9",
        ])
        .unwrap();
        let Some(Command::Play(args)) = cli.command else {
            panic!("expected play");
        };

        let settings = args.apply(Settings::new());
        assert_eq!(*settings.human_mark(), Mark::O);
        assert_eq!(*settings.difficulty(), Difficulty::Hard);
        assert_eq!(*settings.first_player(), FirstPlayer::Computer);
        assert!(!*settings.setup_prompts());
        assert_eq!(*settings.seed(), Some(9));
    }

    #[test]
    fn test_absent_flags_keep_settings() {
        let file = Settings::new().with_difficulty(Difficulty::Easy);
        let settings = PlayArgs::default().apply(file);
        assert_eq!(settings, file);
    }

    #[test]
    fn test_duel_defaults() {
        let cli = Cli::try_parse_from(["noughts", "duel"]).unwrap();
        let Some(Command::Duel(args)) = cli.command else {
            panic!("expected duel");
        };
        assert_eq!(args.x, Difficulty::Hard);
        assert_eq!(args.o, Difficulty::Medium);
        assert_eq!(args.rounds, 100);
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["noughts", "play", "-d", "impossible"]).is_err());
    }
}
