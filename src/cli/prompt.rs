//! Line-oriented operator input
//!
//! Generic over the reader and writer so sessions can be driven from a
//! script in tests.

use std::io::{BufRead, Write};

use crate::error::{LedgerError, LedgerResult};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line
    ///
    /// Returns `EndOfInput` once the input stream is exhausted.
    pub fn ask(&mut self, prompt: &str) -> LedgerResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            writeln!(self.output)?;
            return Err(LedgerError::EndOfInput);
        }

        Ok(line.trim().to_string())
    }

    /// Print a line of text
    pub fn say(&mut self, text: impl AsRef<str>) -> LedgerResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Print text as-is, for pre-formatted blocks that end in a newline
    pub fn show(&mut self, text: impl AsRef<str>) -> LedgerResult<()> {
        write!(self.output, "{}", text.as_ref())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
