//! Session settings: who plays what, how hard, and how the terminal looks.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags. Every field has a default so a partial file works.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use noughts_engine::{Difficulty, Mark};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Which side takes the first move of a round.
///
/// Defaults to [`FirstPlayer::Human`] so the player moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human moves first.
    #[default]
    Human,
    /// The computer moves first.
    Computer,
}

impl FirstPlayer {
    /// Returns the display label for this option.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "You",
            Self::Computer => "Computer",
        }
    }

    /// Toggles between `Human` and `Computer`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

/// When to emit ANSI colors and screen clearing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Detect from the terminal and environment.
    #[default]
    Auto,
    /// Always emit escape sequences.
    Always,
    /// Never emit escape sequences.
    Never,
}

/// User-configurable settings for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct Settings {
    /// Mark played by the human; the computer plays the other one.
    human_mark: Mark,
    /// Computer difficulty tier.
    difficulty: Difficulty,
    /// Who moves first in the opening round.
    first_player: FirstPlayer,
    /// Color behavior.
    color: ColorMode,
    /// Ask mark, difficulty and first player interactively before playing.
    setup_prompts: bool,
    /// Seed for the computer's random choices; OS entropy when absent.
    seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            difficulty: Difficulty::default(),
            first_player: FirstPlayer::default(),
            color: ColorMode::default(),
            setup_prompts: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Creates settings with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// The computer's mark.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(difficulty = %settings.difficulty, human = %settings.human_mark, "Settings loaded");
        Ok(settings)
    }

    /// Loads from `path` when given, else from [`DEFAULT_CONFIG_FILE`] if it
    /// exists, else returns defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
