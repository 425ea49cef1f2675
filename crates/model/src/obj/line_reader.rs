use std::io::{BufRead, Lines};

use super::{ObjParsingError, ObjParsingErrorDetail};

/// Line stream holding at most one line of lookahead.
///
/// A reader that stops on a line it does not own leaves that line buffered, so the next reader
/// starts from it instead of losing it.
pub struct LineReader<R> {
    lines: Lines<R>,
    current: Option<String>,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            current: None,
            line_number: 0,
        }
    }

    /// The buffered line, reading the next one first if nothing is buffered.
    /// Trailing whitespace is stripped. `None` once the stream is exhausted.
    pub fn peek(&mut self) -> Result<Option<&str>, ObjParsingError> {
        if self.current.is_none() {
            let Some(line) = self.lines.next() else {
                return Ok(None);
            };
            let mut line = line.map_err(|err| {
                ObjParsingError::new(ObjParsingErrorDetail::FailedToReadFile(err))
            })?;
            line.truncate(line.trim_end().len());
            self.line_number += 1;
            self.current = Some(line);
        }
        Ok(self.current.as_deref())
    }

    /// Drops the buffered line.
    pub fn advance(&mut self) {
        self.current = None;
    }

    /// Wraps `detail` with the number and content of the buffered line.
    pub fn error(&self, detail: ObjParsingErrorDetail) -> ObjParsingError {
        match self.current.as_ref() {
            Some(line) => ObjParsingError::at_line(self.line_number, line.clone(), detail),
            None => ObjParsingError::new(detail),
        }
    }
}
