//! Console front end: prompts, rendering, players and the round loop.

mod console;
mod input;
mod orchestrator;
mod palette;
mod players;
pub mod ui;

pub use console::Console;
pub use input::parse_in_range;
pub use orchestrator::Orchestrator;
pub use palette::Palette;
pub use players::{ComputerPlayer, HumanPlayer, Player};
