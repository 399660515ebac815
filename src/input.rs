use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::InputError;

/// Reads whitespace-separated coordinates from a line-oriented source.
///
/// Tokens may be spread over any number of lines. Non-finite values
/// (`NaN`, `inf`) are rejected like any other non-numeric token.
pub struct CoordinateReader<R> {
    source: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> CoordinateReader<R> {
    #[must_use]
    pub fn new(source: R) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidNumber`] for a token that is not a finite
    /// number, [`InputError::UnexpectedEof`] when the source is exhausted, and
    /// [`InputError::Io`] if reading fails.
    pub fn next_coordinate(&mut self) -> Result<f64, InputError> {
        let token = self.next_token()?;
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(InputError::InvalidNumber(token)),
        }
    }

    fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Err(InputError::UnexpectedEof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
