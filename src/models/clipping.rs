use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::ClipError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipType {
    Highlight,
    Note,
    Bookmark,
}

impl ClipType {
    /// Match a clipping type keyword case-insensitively ("Highlight", "note", ...)
    pub fn from_keyword(word: &str) -> Result<Self, ClipError> {
        match word.to_ascii_lowercase().as_str() {
            "highlight" => Ok(Self::Highlight),
            "note" => Ok(Self::Note),
            "bookmark" => Ok(Self::Bookmark),
            _ => Err(ClipError::UnknownClipType(word.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Highlight => "highlight",
            Self::Note => "note",
            Self::Bookmark => "bookmark",
        }
    }

    /// Capitalized keyword as the device writes it
    pub fn kindle_keyword(&self) -> &'static str {
        match self {
            Self::Highlight => "Highlight",
            Self::Note => "Note",
            Self::Bookmark => "Bookmark",
        }
    }
}

impl fmt::Display for ClipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device location markers covered by a clipping, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LocationRange {
    pub start: u32,
    pub end: u32,
}

impl LocationRange {
    pub fn new(start: u32, end: u32) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn single(location: u32) -> Self {
        Self { start: location, end: location }
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for LocationRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// One highlight, note, or bookmark parsed from a clippings block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clipping {
    pub title: String,
    /// Empty when the book line carried no (or an empty) parenthetical author
    pub author: String,
    pub clip_type: ClipType,
    pub page: Option<u32>,
    pub loc_range: LocationRange,
    pub datetime: NaiveDateTime,
    /// Body text with its original line terminators; empty for bookmarks
    pub clip_text: String,
}

/// A block that could not be parsed, kept verbatim for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnparseableClipping {
    /// 0-based index of the block within the file
    pub lineno: usize,
    /// 0-based line number of the block's first line within the file
    pub start_line: usize,
    pub error: ClipError,
    pub original_lines: Vec<String>,
}

/// Outcome of parsing one block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseResult {
    Clipping(Clipping),
    Unparseable(UnparseableClipping),
}

impl ParseResult {
    pub fn is_clipping(&self) -> bool {
        matches!(self, Self::Clipping(_))
    }

    pub fn clipping(&self) -> Option<&Clipping> {
        match self {
            Self::Clipping(clipping) => Some(clipping),
            Self::Unparseable(_) => None,
        }
    }

    pub fn unparseable(&self) -> Option<&UnparseableClipping> {
        match self {
            Self::Clipping(_) => None,
            Self::Unparseable(unparseable) => Some(unparseable),
        }
    }

    pub fn into_clipping(self) -> Option<Clipping> {
        match self {
            Self::Clipping(clipping) => Some(clipping),
            Self::Unparseable(_) => None,
        }
    }

    pub fn into_unparseable(self) -> Option<UnparseableClipping> {
        match self {
            Self::Clipping(_) => None,
            Self::Unparseable(unparseable) => Some(unparseable),
        }
    }
}
