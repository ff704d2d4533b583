//! Stateless rendering for the console.

use super::{Console, Palette};
use anyhow::Result;
use noughts_engine::{Board, Mark, Position, Square};
use std::io::{BufRead, Write};

const BANNER: [&str; 3] = [
    "╔══════════════════════════════╗",
    "║          TIC-TAC-TOE         ║",
    "╚══════════════════════════════╝",
];

/// Formats one board row as ` X | O |   `.
pub fn board_row(board: &Board, row: usize, palette: Palette) -> String {
    (0..3)
        .filter_map(|col| Position::from_row_col(row, col))
        .map(|pos| match board.square(pos) {
            Square::Empty => "   ".to_string(),
            Square::Occupied(mark) => format!(" {} ", palette.mark(mark)),
        })
        .collect::<Vec<_>>()
        .join("|")
}

/// Clears the screen and draws the grid.
pub fn draw_board<R: BufRead, W: Write>(console: &mut Console<R, W>, board: &Board) -> Result<()> {
    console.clear()?;
    console.line("")?;
    let palette = console.palette();
    for row in 0..3 {
        console.line(board_row(board, row, palette))?;
        if row < 2 {
            console.line("---+---+---")?;
        }
    }
    console.line("")
}

/// Prints the welcome banner.
pub fn banner<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    for line in BANNER {
        console.line(line)?;
    }
    Ok(())
}

/// Result line for a finished round, from the human's point of view.
///
/// `winner` is `None` for a draw.
pub fn outcome_message(winner: Option<Mark>, human: Mark, palette: Palette) -> String {
    match winner {
        Some(mark) if mark == human => {
            palette.paint("You win this round!", Palette::mark_color(mark))
        }
        Some(mark) => palette.paint("The computer wins this round.", Palette::mark_color(mark)),
        None => "Draw.".to_string(),
    }
}
