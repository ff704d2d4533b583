//! Validated numeric prompts.

use super::Console;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use tracing::{debug, instrument};

/// Parses the first token of `line` as a number inside `range`.
///
/// Anything after the first token is ignored.
pub fn parse_in_range(line: &str, range: &RangeInclusive<usize>) -> Option<usize> {
    line.split_whitespace()
        .next()?
        .parse()
        .ok()
        .filter(|value| range.contains(value))
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Asks for a number in `range`, repeating until the answer is valid.
    ///
    /// # Errors
    ///
    /// Fails if input ends before a valid answer arrives.
    #[instrument(skip(self))]
    pub fn ask_number(&mut self, prompt: &str, range: RangeInclusive<usize>) -> Result<usize> {
        self.prompt(prompt)?;
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed while waiting for an answer");
            }
            match parse_in_range(&line, &range) {
                Some(value) => return Ok(value),
                None => {
                    debug!(answer = line.trim(), "Rejected answer");
                    self.prompt("Invalid input. Try again: ")?;
                }
            }
        }
    }

    /// Asks a yes/no question answered with 1 or 0.
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask_number(prompt, 0..=1)? == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::Palette;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Palette::plain())
    }

    #[test]
    fn test_parse_in_range() {
        assert_eq!(parse_in_range("2\n", &(1..=3)), Some(2));
        assert_eq!(parse_in_range("  3 extra", &(1..=3)), Some(3));
        assert_eq!(parse_in_range("4", &(1..=3)), None);
        assert_eq!(parse_in_range("-1", &(0..=1)), None);
        assert_eq!(parse_in_range("", &(0..=1)), None);
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut console = console("abc\n5\n1\n");
        assert_eq!(console.ask_number("Pick (1-2): ", 1..=2).unwrap(), 1);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.starts_with("Pick (1-2): "));
        assert_eq!(output.matches("Invalid input. Try again: ").count(), 2);
    }

    #[test]
    fn test_closed_input_is_error() {
        let mut console = console("7\n");
        assert!(console.ask_number("Pick: ", 0..=1).is_err());
    }

    #[test]
    fn test_yes_no() {
        let mut console = console("1\n0\n");
        assert!(console.ask_yes_no("Again? ").unwrap());
        assert!(!console.ask_yes_no("Again? ").unwrap());
    }
}
