//! Token-oriented reader over a buffered input stream.

use crate::error::{ConsoleError, ErrorKind};
use std::collections::VecDeque;
use std::io::BufRead;
use tracing::{debug, instrument, warn};

/// One unit of raw input, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// A whitespace-delimited token.
    Token(String),
    /// The stream is closed; no more input will arrive.
    EndOfStream,
    /// The stream delivered content that cannot be read as text.
    Fault,
}

/// Splits a line-oriented stream into whitespace-delimited tokens.
///
/// Tokens left over from a line are handed out by later reads until
/// [`TokenReader::discard_line`] drops them.
#[derive(Debug)]
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
        }
    }

    /// Reads the next token, pulling new lines from the stream as needed.
    ///
    /// Blank lines are skipped.
    #[instrument(skip(self), fields(pending = self.pending.len()))]
    pub fn read_token(&mut self) -> Result<RawInput, ConsoleError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                debug!(%token, "Token read");
                return Ok(RawInput::Token(token));
            }

            let mut line = Vec::new();
            match self.inner.read_until(b'\n', &mut line) {
                Ok(0) => {
                    debug!(kind = %ErrorKind::StreamClosed, "End of input");
                    return Ok(RawInput::EndOfStream);
                }
                Ok(_) => match String::from_utf8(line) {
                    Ok(text) => {
                        self.pending
                            .extend(text.split_whitespace().map(str::to_owned));
                    }
                    Err(e) => {
                        warn!(error = %e, "Discarding undecodable line");
                        return Ok(RawInput::Fault);
                    }
                },
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Drops whatever is left of the current line.
    #[instrument(skip(self))]
    pub fn discard_line(&mut self) {
        if !self.pending.is_empty() {
            debug!(dropped = self.pending.len(), "Discarding rest of line");
            self.pending.clear();
        }
    }
}
