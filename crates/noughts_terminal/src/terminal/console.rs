//! Line-oriented console shared by prompts and renderers.

use super::Palette;
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Reader, writer and color capability for one session.
///
/// Generic over its streams so tests can script input and inspect output.
pub struct Console<R, W> {
    pub(super) input: R,
    pub(super) output: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W, palette: Palette) -> Self {
        Self {
            input,
            output,
            palette,
        }
    }

    /// Color capability of the output stream.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes text followed by a newline.
    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes text without a newline and flushes.
    pub fn prompt(&mut self, text: impl Display) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Clears the screen when the palette allows escape sequences.
    pub fn clear(&mut self) -> Result<()> {
        if self.palette.ansi() {
            queue!(self.output, MoveTo(0, 0), Clear(ClearType::FromCursorDown))?;
        }
        Ok(())
    }
}
