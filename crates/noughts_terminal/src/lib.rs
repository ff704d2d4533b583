//! Noughts terminal - play tic-tac-toe against the computer.
//!
//! This crate is the console front end for `noughts_engine`. It owns every
//! I/O concern: command-line parsing, the settings file, color capability,
//! prompts, score keeping and the replay loop. Game decisions are delegated
//! to the engine.
//!
//! # Example
//!
//! ```no_run
//! use noughts_terminal::{Console, Palette, Session, Settings};
//! use std::io;
//!
//! # fn example() -> anyhow::Result<()> {
//! let settings = Settings::new();
//! let console = Console::new(io::stdin().lock(), io::stdout(), Palette::detect(*settings.color()));
//! let tally = Session::new(console, settings).run()?;
//! println!("{tally}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod duel;
mod session;
mod settings;
mod terminal;

pub use cli::{Cli, Command, DuelArgs, PlayArgs};
pub use duel::{DuelReport, play_round, run_duel};
pub use session::{ScoreTally, Session};
pub use settings::{ColorMode, ConfigError, DEFAULT_CONFIG_FILE, FirstPlayer, Settings};
pub use terminal::{
    ComputerPlayer, Console, HumanPlayer, Orchestrator, Palette, Player, parse_in_range, ui,
};
