//! Terminal color capability.
//!
//! The engine never sees this; renderers receive it through the console.

use crate::settings::ColorMode;
use crossterm::style::{Color, Stylize, style};
use noughts_engine::Mark;
use std::io::IsTerminal;
use tracing::{debug, instrument};

/// `TERM` fragments that indicate ANSI support.
const ANSI_TERMS: [&str; 4] = ["xterm", "ansi", "color", "linux"];

/// Whether escape sequences may be written, and the colors to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    ansi: bool,
}

impl Palette {
    /// No colors, no screen clearing.
    pub fn plain() -> Self {
        Self { ansi: false }
    }

    /// Colors and screen clearing enabled.
    pub fn colored() -> Self {
        Self { ansi: true }
    }

    /// Resolves `mode` against the process environment and stdout.
    #[instrument]
    pub fn detect(mode: ColorMode) -> Self {
        let term = std::env::var("TERM").ok();
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        let tty = std::io::stdout().is_terminal();
        let palette = Self::resolve(mode, term.as_deref(), no_color, tty);
        debug!(?term, no_color, tty, ansi = palette.ansi, "Color capability");
        palette
    }

    /// Pure resolution rule behind [`Palette::detect`].
    pub fn resolve(mode: ColorMode, term: Option<&str>, no_color: bool, tty: bool) -> Self {
        let ansi = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                tty
                    && !no_color
                    && term.is_some_and(|t| ANSI_TERMS.iter().any(|fragment| t.contains(fragment)))
            }
        };
        Self { ansi }
    }

    /// True when escape sequences may be written.
    pub fn ansi(self) -> bool {
        self.ansi
    }

    /// Color associated with a mark.
    pub fn mark_color(mark: Mark) -> Color {
        match mark {
            Mark::X => Color::DarkRed,
            Mark::O => Color::DarkBlue,
        }
    }

    /// `text` in `color`, or unchanged without ANSI support.
    pub fn paint(self, text: &str, color: Color) -> String {
        if self.ansi {
            style(text).with(color).to_string()
        } else {
            text.to_owned()
        }
    }

    /// A mark's letter in its color.
    pub fn mark(self, mark: Mark) -> String {
        self.paint(&mark.to_string(), Self::mark_color(mark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced_modes_ignore_environment() {
        assert!(Palette::resolve(ColorMode::Always, None, true, false).ansi());
        assert!(!Palette::resolve(ColorMode::Never, Some("xterm-256color"), false, true).ansi());
    }

    #[test]
    fn test_auto_requires_known_term_and_tty() {
        assert!(Palette::resolve(ColorMode::Auto, Some("xterm-256color"), false, true).ansi());
        assert!(Palette::resolve(ColorMode::Auto, Some("linux"), false, true).ansi());
        assert!(!Palette::resolve(ColorMode::Auto, Some("dumb"), false, true).ansi());
        assert!(!Palette::resolve(ColorMode::Auto, None, false, true).ansi());
        assert!(!Palette::resolve(ColorMode::Auto, Some("xterm"), false, false).ansi());
    }

    #[test]
    fn test_no_color_wins_in_auto() {
        assert!(!Palette::resolve(ColorMode::Auto, Some("xterm"), true, true).ansi());
    }

    #[test]
    fn test_colored_marks_use_base_colors() {
        let palette = Palette::colored();
        assert_eq!(palette.mark(Mark::X), "\u{1b}[38;5;1mX\u{1b}[39m");
        assert_eq!(palette.mark(Mark::O), "\u{1b}[38;5;4mO\u{1b}[39m");
    }

    #[test]
    fn test_plain_paint_is_identity() {
        assert_eq!(Palette::plain().mark(Mark::O), "O");
        assert_eq!(Palette::plain().paint("hello", Color::Red), "hello");
    }
}
