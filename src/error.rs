//! Errors raised while parsing a single clipping block.
//!
//! File-level failures (the clippings file cannot be opened) are not represented here;
//! those use `anyhow::Result` with context, like the rest of the application layer.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Failure category of a [`ClipError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The block violates the clippings grammar
    Structural,
    /// The block is well shaped but a value (the datetime) is invalid
    Value,
    /// Reading the block from its source failed
    Io,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipError {
    #[error("book line is empty")]
    EmptyBookLine,

    #[error("clipping metadata line is empty")]
    EmptyMetaLine,

    #[error("unknown clipping type '{0}'")]
    UnknownClipType(String),

    #[error("datetime not found in clipping metadata string")]
    MissingDatetime,

    #[error("location not found in clipping metadata string")]
    MissingLocation,

    #[error("invalid location range '{0}'")]
    InvalidLocation(String),

    #[error("invalid page number '{0}'")]
    InvalidPage(String),

    #[error("unexpected token '{0}' in clipping metadata string")]
    UnexpectedToken(String),

    #[error("insufficient strings to constitute a clipping ({0} lines)")]
    InsufficientLines(usize),

    #[error("unrecognized datetime '{0}'")]
    UnrecognizedDatetime(String),

    #[error("datetime component out of range in '{0}'")]
    DatetimeOutOfRange(String),

    #[error("failed to read clipping block: {0}")]
    Io(String),
}

impl ClipError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnrecognizedDatetime(_) | Self::DatetimeOutOfRange(_) => ErrorKind::Value,
            Self::Io(_) => ErrorKind::Io,
            _ => ErrorKind::Structural,
        }
    }

    pub fn is_structural(&self) -> bool {
        self.kind() == ErrorKind::Structural
    }

    pub fn is_value(&self) -> bool {
        self.kind() == ErrorKind::Value
    }
}

impl Serialize for ClipError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ClipError", 2)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
