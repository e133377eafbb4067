//! Line source for record files.
//!
//! This module provides async functionality for reading record files
//! line-by-line with buffering and line number tracking, and for driving
//! the [`TreeAssembler`] from such a reader.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::Result;
use crate::assembler::TreeAssembler;
use crate::model::People;

/// Async reader for record lines.
///
/// `LineReader` wraps an async reader and yields its lines without their
/// terminators (`\n` or `\r\n`). It tracks line numbers so callers can
/// report where a problem occurred.
///
/// # Type Parameters
///
/// * `R` - The underlying async reader type. Must implement [`AsyncRead`] and [`Unpin`].
///
/// # Examples
///
/// ```no_run
/// use linexml_records::reader::LineReader;
/// use tokio::fs::File;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let file = File::open("people.txt").await?;
/// let mut reader = LineReader::new(file);
/// while let Some(line) = reader.read_line().await? {
///     println!("{}: {}", reader.line_number(), line);
/// }
/// # Ok(())
/// # }
/// ```
pub struct LineReader<R> {
    /// Buffered reader wrapping the underlying async reader.
    reader: BufReader<R>,
    /// Current line number (1-based counting, 0 before any lines are read).
    line_number: usize,
    /// Reused line buffer.
    buffer: String,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    /// Creates a new `LineReader` wrapping the given async reader.
    ///
    /// The counter starts at 0 and increments after each line is read, so the
    /// first line read is numbered 1.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::new(),
        }
    }

    /// Returns the current line number.
    ///
    /// Returns 0 before any lines have been read, afterwards the 1-based number
    /// of the last line read.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads the next line, without its terminator.
    ///
    /// Returns `Ok(None)` at end of input. A final line without a trailing
    /// newline is still returned; a trailing newline does not produce an
    /// extra empty line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading fails or the input is not valid UTF-8.
    pub async fn read_line(&mut self) -> Result<Option<String>> {
        self.buffer.clear();
        let read = self.reader.read_line(&mut self.buffer).await?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let line = self
            .buffer
            .strip_suffix('\n')
            .map_or(self.buffer.as_str(), |l| l.strip_suffix('\r').unwrap_or(l));
        Ok(Some(line.to_string()))
    }
}

/// Reads every line from `reader` and assembles the tree.
///
/// Stops at the first I/O or record error.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if reading fails and
/// [`Error::Parse`](crate::Error::Parse) for the first bad record.
pub async fn parse_reader<R: AsyncRead + Unpin>(reader: R) -> Result<People> {
    let mut lines = LineReader::new(reader);
    let mut assembler = TreeAssembler::new();
    while let Some(line) = lines.read_line().await? {
        assembler.push_line(&line)?;
    }
    Ok(assembler.finish())
}

/// Opens the file at `path` and assembles its records into a tree.
///
/// # Errors
///
/// See [`parse_reader`]; also fails if the file cannot be opened.
pub async fn parse_file(path: impl AsRef<Path>) -> Result<People> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Reading records");
    let file = File::open(path).await?;
    parse_reader(file).await
}
