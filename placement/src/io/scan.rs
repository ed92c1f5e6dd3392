//! Whitespace-delimited token reader for the flat data files.

use std::str::{FromStr, SplitAsciiWhitespace};

/// Sequential reader over whitespace-separated values.
///
/// A token that does not parse as the requested type ends the scan, the same
/// way a missing token does. [`Scanner::bad_token`] tells the two apart.
pub struct Scanner<'a> {
    tokens: SplitAsciiWhitespace<'a>,
    exhausted: bool,
    bad_token: Option<&'a str>,
}

impl<'a> Scanner<'a> {
    pub fn new(contents: &'a str) -> Self {
        Self {
            tokens: contents.split_ascii_whitespace(),
            exhausted: false,
            bad_token: None,
        }
    }

    /// Next token parsed as `T`, or `None` at end of input or on a bad token.
    pub fn read<T: FromStr>(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }
        let Some(token) = self.tokens.next() else {
            self.exhausted = true;
            return None;
        };
        match token.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.exhausted = true;
                self.bad_token = Some(token);
                None
            }
        }
    }

    /// The token that stopped the scan, if it ended on unparsable input
    /// rather than at end of input.
    pub fn bad_token(&self) -> Option<&'a str> {
        self.bad_token
    }

    /// Read exactly `n` values, or `None` if any is missing.
    pub fn read_n<T: FromStr>(&mut self, n: usize) -> Option<Vec<T>> {
        (0..n).map(|_| self.read()).collect()
    }
}
