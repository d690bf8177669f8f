use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Splits a line-oriented source into whitespace-separated tokens.
///
/// Tokens may span several lines of input: a prompt asking for two values accepts
/// them on one line or on separate lines.
pub struct TokenReader<R: BufRead> {
    source: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` once the source is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
