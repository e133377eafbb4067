//! Error types for record parsing and tree assembly.
//!
//! A [`ParseError`] describes the first malformed or misplaced record in an
//! input. It is always terminal: the assembler stops at the first error and
//! discards the partial tree. [`Error`] wraps parse errors together with the
//! I/O failures of the line source and output helpers.

use std::fmt;
use std::io;
use thiserror::Error;

use crate::record::{FieldCount, RecordKind};

/// The error type for linexml-records operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A record could not be decoded or placed in the tree.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The XML serializer produced output that is not valid UTF-8.
    #[error("XML output error: {0}")]
    Xml(String),
}

/// A specialized Result type for linexml-records operations.
pub type Result<T> = std::result::Result<T, Error>;

/// What went wrong with a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line is empty after trimming surrounding whitespace.
    EmptyLine,

    /// The leading character is not one of the known record tags.
    UnknownType(char),

    /// The record has the wrong number of fields for its kind.
    Arity {
        /// Kind of the record.
        kind: RecordKind,
        /// Field count the kind accepts.
        expected: FieldCount,
        /// Field count found on the line.
        found: usize,
    },

    /// A family record appeared before any person record.
    OrphanFamily,

    /// An address or phone record appeared with no person or family open.
    NoTarget(RecordKind),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLine => write!(f, "empty lines are not allowed"),
            Self::UnknownType(tag) => write!(
                f,
                "unknown record type '{tag}', expected one of {}",
                RecordKind::TAGS_DISPLAY
            ),
            Self::Arity {
                kind,
                expected,
                found,
            } => write!(
                f,
                "a '{kind}' record takes {expected} fields, found {found}"
            ),
            Self::OrphanFamily => write!(f, "family record has no person to attach to"),
            Self::NoTarget(kind) => {
                write!(f, "'{kind}' record has no person or family to attach to")
            }
        }
    }
}

/// A record that could not be decoded or placed in the tree.
///
/// Carries the raw line as read (before trimming) so the caller can show the
/// offending input. `line_number` is 1-based and is filled in by the
/// [`TreeAssembler`](crate::TreeAssembler); errors from a bare
/// [`decode_record`](crate::decode_record) call have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Category of the error.
    pub kind: ParseErrorKind,
    /// The offending raw line.
    pub line: String,
    /// 1-based line number within the input, when known.
    pub line_number: Option<usize>,
}

impl ParseError {
    /// Creates an error for `line` without position information.
    pub fn new(kind: ParseErrorKind, line: impl Into<String>) -> Self {
        Self {
            kind,
            line: line.into(),
            line_number: None,
        }
    }

    /// Attaches a 1-based line number to the error.
    #[must_use]
    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    /// Returns the error category.
    #[must_use]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Returns a static string identifying the error kind.
    ///
    /// Useful for filtering and grouping without matching on the enum.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::EmptyLine => "empty_line",
            ParseErrorKind::UnknownType(_) => "unknown_type",
            ParseErrorKind::Arity { .. } => "arity",
            ParseErrorKind::OrphanFamily => "orphan_family",
            ParseErrorKind::NoTarget(_) => "no_target",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line_number) = self.line_number {
            write!(f, "line {line_number}: ")?;
        }
        write!(f, "{}: {:?}", self.kind, self.line)
    }
}

impl std::error::Error for ParseError {}
