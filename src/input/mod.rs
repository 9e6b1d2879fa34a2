//! Line input abstraction
//!
//! The play loop reads typed lines through the [`LineReader`] trait so it
//! can be driven by a scripted reader in tests instead of a real terminal.

use std::io::{self, BufRead};

/// Source of typed input lines
pub trait LineReader {
    /// Read the next line of input, trimmed of surrounding whitespace
    ///
    /// # Errors
    /// Returns an I/O error if reading fails or the input is exhausted.
    fn read_line(&mut self) -> io::Result<String>;
}

/// Reads lines from standard input
#[derive(Debug, Default)]
pub struct StdinReader;

impl LineReader for StdinReader {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input",
            ));
        }
        Ok(line.trim().to_string())
    }
}
