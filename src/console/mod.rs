//! Line-oriented console used by the session loop.
//!
//! The console reads whole lines from any [`BufRead`] and writes to any
//! [`Write`], so sessions can be driven by scripted input in tests.

mod prompt;

pub use prompt::{
    Continue, InvalidInput, PlayerMode, is_quit, parse_continue, parse_coordinate,
    parse_player_mode,
};

use crate::error::SessionError;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Signal that stops the session before it would otherwise continue.
#[derive(Debug, Clone)]
pub enum Interrupt {
    /// The user typed a quit token.
    Quit,
    /// Input reached end of file.
    Closed,
    /// Reading or writing failed.
    Fault(SessionError),
}

impl From<SessionError> for Interrupt {
    fn from(err: SessionError) -> Self {
        Interrupt::Fault(err)
    }
}

impl From<std::io::Error> for Interrupt {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Interrupt::Fault(SessionError::from(err))
    }
}

/// Text input/output channel.
pub struct Console<'a> {
    input: Box<dyn BufRead + 'a>,
    output: Box<dyn Write + 'a>,
}

impl std::fmt::Debug for Console<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

impl<'a> Console<'a> {
    /// Wraps an input reader and an output writer.
    pub fn new(input: impl BufRead + 'a, output: impl Write + 'a) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Writes `text` followed by a newline.
    pub fn line(&mut self, text: impl std::fmt::Display) -> Result<(), Interrupt> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> Result<(), Interrupt> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Shows `prompt` and reads one line with its terminator removed.
    ///
    /// Returns [`Interrupt::Closed`] at end of input and
    /// [`Interrupt::Quit`] when the line starts with a quit token.
    #[instrument(skip(self))]
    pub fn read(&mut self, prompt: &str) -> Result<String, Interrupt> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            debug!("Input closed");
            return Err(Interrupt::Closed);
        }
        // Invalid UTF-8 becomes an unrecognized token rather than a fault.
        let buf = String::from_utf8_lossy(&bytes);
        let answer = buf
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(&*buf)
            .to_string();

        if is_quit(&answer) {
            debug!("Quit requested");
            return Err(Interrupt::Quit);
        }
        Ok(answer)
    }

    /// Re-issues `prompt` until `parse` accepts the answer.
    #[instrument(skip(self, parse))]
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InvalidInput>,
    ) -> Result<T, Interrupt> {
        loop {
            let answer = self.read(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(reason) => debug!(%reason, "Re-prompting"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_reprompts_until_valid() {
        let mut out = Vec::new();
        let value = {
            let mut console = Console::new(Cursor::new("\n7\n2\n"), &mut out);
            console.ask("Pick: ", parse_coordinate).unwrap()
        };
        assert_eq!(value, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "Pick: Pick: Pick: ");
    }

    #[test]
    fn test_read_strips_crlf() {
        let mut console = Console::new(Cursor::new("1\r\n"), Vec::new());
        assert_eq!(console.read("> ").unwrap(), "1");
    }

    #[test]
    fn test_invalid_utf8_is_reprompted() {
        let mut out = Vec::new();
        let value = {
            let mut console = Console::new(Cursor::new(b"\xff\n3\n".to_vec()), &mut out);
            console.ask("Pick: ", parse_coordinate).unwrap()
        };
        assert_eq!(value, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "Pick: Pick: ");
    }

    #[test]
    fn test_quit_interrupts() {
        let mut console = Console::new(Cursor::new("Q\n"), Vec::new());
        assert!(matches!(
            console.ask("> ", parse_coordinate),
            Err(Interrupt::Quit)
        ));
    }

    #[test]
    fn test_end_of_input_interrupts() {
        let mut console = Console::new(Cursor::new("9\n"), Vec::new());
        assert!(matches!(
            console.ask("> ", parse_coordinate),
            Err(Interrupt::Closed)
        ));
    }
}
