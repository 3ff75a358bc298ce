//! Parser for a clipping's second (metadata) line.
//!
//! ```text
//! - Your Highlight on Page 376 | Location 6566-6568 | Added on Friday, January 27, 2012, 07:18 PM
//! - Your Note Location 2060 | Added on Sunday, November 13, 2011, 06:57 PM
//! - Your Bookmark on page 12 | location 3442 | Added on Wednesday, June 1, 2016 10:25:25 PM
//! ```
//!
//! Everything after `Added on` is the datetime. The text before it is scanned left to
//! right as tokens, treating `|` like whitespace, so the page and location fragments are
//! independently optional regardless of how many pipes separate them.

use chrono::NaiveDateTime;

use super::datetime::parse_kindle_datetime;
use crate::error::ClipError;
use crate::models::{ClipType, LocationRange};

const DATETIME_MARKER: &str = "added on";

/// Parsed content of a metadata line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipMeta {
    pub clip_type: ClipType,
    pub page: Option<u32>,
    pub loc_range: LocationRange,
    pub datetime: NaiveDateTime,
}

pub fn parse_meta_line(line: &str) -> Result<ClipMeta, ClipError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ClipError::EmptyMetaLine);
    }

    // ASCII lowercasing keeps byte offsets aligned with `line`
    let marker =
        line.to_ascii_lowercase().find(DATETIME_MARKER).ok_or(ClipError::MissingDatetime)?;
    let header = &line[..marker];
    let datetime_text = &line[marker + DATETIME_MARKER.len()..];

    let mut tokens = header
        .trim_start_matches('-')
        .split(|c: char| c == '|' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .peekable();

    if tokens.peek().is_some_and(|token| token.eq_ignore_ascii_case("your")) {
        tokens.next();
    }
    let clip_type = ClipType::from_keyword(tokens.next().unwrap_or_default())?;

    let mut page = None;
    let mut loc_range = None;
    while let Some(token) = tokens.next() {
        match token.to_ascii_lowercase().as_str() {
            "on" | "at" => {}
            "page" if page.is_none() => {
                let value = tokens.next().unwrap_or_default();
                let number =
                    value.parse::<u32>().map_err(|_| ClipError::InvalidPage(value.to_string()))?;
                page = Some(number);
            }
            "location" | "loc." if loc_range.is_none() => {
                loc_range = Some(parse_location(tokens.next().unwrap_or_default())?);
            }
            _ => return Err(ClipError::UnexpectedToken(token.to_string())),
        }
    }
    let loc_range = loc_range.ok_or(ClipError::MissingLocation)?;

    let datetime = parse_kindle_datetime(datetime_text)?;

    Ok(ClipMeta { clip_type, page, loc_range, datetime })
}

/// `A` yields `(A, A)`, `A-B` yields `(A, B)`
fn parse_location(value: &str) -> Result<LocationRange, ClipError> {
    let invalid = || ClipError::InvalidLocation(value.to_string());

    match value.split_once('-') {
        Some((start, end)) => {
            let start = start.parse::<u32>().map_err(|_| invalid())?;
            let end = end.parse::<u32>().map_err(|_| invalid())?;
            LocationRange::new(start, end).ok_or_else(invalid)
        }
        None => value.parse::<u32>().map(LocationRange::single).map_err(|_| invalid()),
    }
}
