//! Difficulty tiers for the computer opponent.

use serde::{Deserialize, Serialize};

/// Which policy answers the computer's move requests.
///
/// Parses from its lowercase name or from the numeric codes `0`, `1`, `2`
/// used by the setup prompt.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty square.
    #[strum(to_string = "easy", serialize = "0")]
    Easy,
    /// Win, block, then positional preference.
    #[default]
    #[strum(to_string = "medium", serialize = "1")]
    Medium,
    /// Exhaustive alpha-beta search; never loses.
    #[strum(to_string = "hard", serialize = "2")]
    Hard,
}

impl Difficulty {
    /// Creates a difficulty from its numeric code.
    pub fn from_code(code: usize) -> Option<Self> {
        match code {
            0 => Some(Difficulty::Easy),
            1 => Some(Difficulty::Medium),
            2 => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
