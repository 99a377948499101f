use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn index_out_of_range(op: Operation, index: usize, len: usize) -> Error {
        Error(ErrorKind::IndexOutOfRange { op, index, len }.into())
    }

    /// Returns the offending `(index, len)` pair if this is an index error.
    pub fn out_of_range_index(&self) -> Option<(usize, usize)> {
        match self.kind() {
            ErrorKind::IndexOutOfRange { index, len, .. } => Some((*index, *len)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("cannot {op} element at {index} in an array with {len} elements")]
    IndexOutOfRange {
        op: Operation,
        index: usize,
        len: usize,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

/// Index-taking operation that rejected its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Get,
    Insert,
    Set,
    Remove,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Get => "get",
            Operation::Insert => "insert",
            Operation::Set => "set",
            Operation::Remove => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
