//! Line-based terminal port for the checkout session.
//!
//! End of input (Ctrl-D) at any prompt cancels the transaction. A line that
//! is not valid UTF-8 reads as a blank answer, so the question is asked again.

use std::io::{self, BufRead, Write};

use furniture_shop_core::Prompter;

/// A [`Prompter`] over any line reader and writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Terminal bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a block of text followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_block(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Consume the terminal and return its writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}\n> ")?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                writeln!(self.output)?;
                Ok(None)
            }
            Ok(_) => Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned())),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::debug!(error = %e, "Discarded unreadable input line");
                Ok(Some(String::new()))
            }
            Err(e) => Err(e),
        }
    }
}

impl<R: BufRead, W: Write> Prompter for Terminal<R, W> {
    fn prompt(&mut self, message: &str) -> Option<String> {
        match self.ask(message) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "Terminal I/O failed, treating as cancel");
                None
            }
        }
    }

    fn notify(&mut self, message: &str) {
        if let Err(e) = self.write_block(message) {
            tracing::warn!(error = %e, "Failed to write notice");
        }
    }
}
