//! Line-oriented prompts over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Prompting console. End of input is reported as `None` so every menu can
/// unwind cleanly when a script runs out.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Print `label`, then read one trimmed line.
    pub fn ask_line(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until the answer parses as `T`.
    pub fn ask<T: FromStr>(&mut self, label: &str) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.ask_line(label)? else {
                return Ok(None);
            };
            match line.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say(format!("'{}' is not a valid value, try again.", line))?,
            }
        }
    }

    /// Ask until the answer parses and satisfies `accept`.
    pub fn ask_where<T: FromStr + Display>(
        &mut self,
        label: &str,
        hint: &str,
        accept: impl Fn(&T) -> bool,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(value) = self.ask::<T>(label)? else {
                return Ok(None);
            };
            if accept(&value) {
                return Ok(Some(value));
            }
            self.say(format!("{} is out of range ({}), try again.", value, hint))?;
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
