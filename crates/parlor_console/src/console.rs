//! Console wrapper pairing a token reader with an output stream.

use crate::error::{ConsoleError, Rejection};
use crate::input::{RawInput, TokenReader};
use crate::parse::{ValidationOutcome, parse_yes_no};
use std::io::{BufRead, StdinLock, Stdout, Write};
use tracing::{debug, instrument};

/// Re-prompt shown while a yes/no answer is not recognized.
pub const YES_NO_RETRY: &str = "Please enter 'y' for yes or 'n' for no: ";

/// Interactive console: prompts on the writer, tokens from the reader.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: TokenReader<R>,
    out: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Creates a console over the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console from any buffered reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self {
            reader: TokenReader::new(input),
            out: output,
        }
    }

    /// Writes a full line of text.
    pub fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    /// Writes a prompt without a trailing newline.
    pub fn prompt(&mut self, text: &str) -> Result<(), ConsoleError> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    /// Prompts once, reads one token and validates it with `parse`.
    ///
    /// Rejected or unreadable input discards the rest of its line so the
    /// next prompt starts from fresh input.
    #[instrument(skip(self, parse))]
    pub fn read_with<T>(
        &mut self,
        prompt: &str,
        parse: impl FnOnce(&str) -> ValidationOutcome<T>,
    ) -> Result<ValidationOutcome<T>, ConsoleError> {
        self.prompt(prompt)?;

        let outcome = match self.reader.read_token()? {
            RawInput::Token(token) => parse(&token),
            RawInput::EndOfStream => ValidationOutcome::EndOfInput,
            RawInput::Fault => ValidationOutcome::Rejected(Rejection::Unreadable),
        };

        if let ValidationOutcome::Rejected(reason) = &outcome {
            debug!(%reason, kind = %reason.kind(), "Input rejected");
            self.reader.discard_line();
        }

        Ok(outcome)
    }

    /// Asks a yes/no question until it is answered.
    ///
    /// Returns `None` if the stream closes before an answer arrives.
    #[instrument(skip(self))]
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<Option<bool>, ConsoleError> {
        self.prompt(prompt)?;

        loop {
            match self.reader.read_token()? {
                RawInput::Token(token) => {
                    if let Some(answer) = parse_yes_no(&token) {
                        debug!(answer, "Yes/no answered");
                        return Ok(Some(answer));
                    }
                }
                RawInput::EndOfStream => return Ok(None),
                RawInput::Fault => {}
            }

            self.reader.discard_line();
            self.prompt(YES_NO_RETRY)?;
        }
    }

    /// Returns the output stream.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the console and returns the output stream.
    pub fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_int_in_range;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<&str>, Vec<u8>> {
        Console::new(Cursor::new(input), Vec::new())
    }

    fn transcript(console: Console<Cursor<&str>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_with_accepts() {
        let mut console = console("7\n");
        let outcome = console
            .read_with("Pick: ", |t| parse_int_in_range(t, 1, 9))
            .unwrap();
        assert_eq!(outcome, ValidationOutcome::Accepted(7));
        assert_eq!(transcript(console), "Pick: ");
    }

    #[test]
    fn test_rejection_discards_line() {
        let mut console = console("abc 5\n6\n");
        let first = console
            .read_with("Pick: ", |t| parse_int_in_range(t, 1, 9))
            .unwrap();
        assert!(matches!(first, ValidationOutcome::Rejected(Rejection::NotANumber(_))));

        // "5" shared the rejected line and must not be read.
        let second = console
            .read_with("Pick: ", |t| parse_int_in_range(t, 1, 9))
            .unwrap();
        assert_eq!(second, ValidationOutcome::Accepted(6));
    }

    #[test]
    fn test_undecodable_line_rejected_then_next_line_read() {
        let mut console = Console::new(Cursor::new(&b"\xff 3\n4\n"[..]), Vec::new());
        let first = console
            .read_with("Pick: ", |t| parse_int_in_range(t, 1, 9))
            .unwrap();
        assert_eq!(first, ValidationOutcome::Rejected(Rejection::Unreadable));

        let second = console
            .read_with("Pick: ", |t| parse_int_in_range(t, 1, 9))
            .unwrap();
        assert_eq!(second, ValidationOutcome::Accepted(4));
        assert_eq!(console.output().as_slice(), b"Pick: Pick: ");
    }

    #[test]
    fn test_end_of_input() {
        let mut console = console("");
        let outcome = console
            .read_with("Pick: ", |t| parse_int_in_range(t, 1, 9))
            .unwrap();
        assert_eq!(outcome, ValidationOutcome::EndOfInput);
    }

    #[test]
    fn test_yes_no_retries_until_answered() {
        let mut console = console("maybe\nYES\n");
        assert_eq!(console.ask_yes_no("Again? (y/n): ").unwrap(), Some(true));
        assert_eq!(transcript(console), format!("Again? (y/n): {YES_NO_RETRY}"));
    }

    #[test]
    fn test_yes_no_end_of_input() {
        let mut console = console("what\n");
        assert_eq!(console.ask_yes_no("Again? (y/n): ").unwrap(), None);
    }
}
