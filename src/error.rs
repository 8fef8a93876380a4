use std::io;
use thiserror::Error;

/// Errors raised by tree operations and roster persistence.
#[derive(Debug, Error)]
pub enum Error {
    /// The operation needs at least one student but the tree has none.
    #[error("tree is empty")]
    EmptyTree,

    /// A roster line could not be parsed. `line` is 1-based.
    #[error("line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },

    /// Reading or writing a roster failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The reason a roster line was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The line did not split into exactly five fields.
    #[error("expected 5 comma-separated fields, found {0}")]
    FieldCount(usize),

    /// The course or age field is not an integer.
    #[error("{field} is not an integer: {value:?}")]
    Integer { field: &'static str, value: String },

    /// The average grade is not a floating-point number.
    #[error("average grade is not a number: {0:?}")]
    Key(String),
}

/// A `Result` whose error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
