//! Kindle "Added on" datetime grammar.
//!
//! Devices have emitted several shapes over the years. An optional leading weekday
//! (`Thursday, `) is recognized and discarded without being checked against the date,
//! then the remainder must fully match one of [`DATETIME_SHAPES`], tried in order:
//!
//! ```text
//! November 2, 2016 9:04:02 PM          seconds, no comma before the time
//! June 1, 2016 10:25 PM                no seconds, no comma before the time
//! January 12, 2012, 11:34:10 PM        seconds, comma before the time
//! January 12, 2012, 11:34 PM           no seconds, comma before the time
//! ```
//!
//! The AM/PM marker is mandatory in every shape.

use chrono::format::ParseErrorKind;
use chrono::{NaiveDateTime, Timelike, Weekday};

use crate::error::ClipError;

/// chrono formats for the supported shapes, in precedence order
pub const DATETIME_SHAPES: &[&str] = &[
    "%B %d, %Y %I:%M:%S %p",
    "%B %d, %Y %I:%M %p",
    "%B %d, %Y, %I:%M:%S %p",
    "%B %d, %Y, %I:%M %p",
];

/// Shape used when writing datetimes back out; always carries seconds
const OUTPUT_SHAPE: &str = "%A, %B %-d, %Y %-I:%M:%S %p";

/// Parse a Kindle datetime string into a naive (timezone-less) timestamp
///
/// Fails with [`ClipError::DatetimeOutOfRange`] when a shape matched but a component
/// was out of bounds (day 99, second 60), and [`ClipError::UnrecognizedDatetime`]
/// when no shape matched at all.
pub fn parse_kindle_datetime(text: &str) -> Result<NaiveDateTime, ClipError> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let body = strip_weekday(&normalized);
    let mut out_of_range = false;

    for shape in DATETIME_SHAPES {
        match NaiveDateTime::parse_from_str(body, shape) {
            // chrono represents second 60 as a leap second
            Ok(datetime) if datetime.nanosecond() >= 1_000_000_000 => out_of_range = true,
            Ok(datetime) => return Ok(datetime),
            Err(e)
                if matches!(e.kind(), ParseErrorKind::OutOfRange | ParseErrorKind::Impossible) =>
            {
                out_of_range = true;
            }
            Err(_) => {}
        }
    }

    if out_of_range {
        Err(ClipError::DatetimeOutOfRange(normalized))
    } else {
        Err(ClipError::UnrecognizedDatetime(normalized))
    }
}

/// Format a timestamp the way current devices write it
pub fn format_kindle_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format(OUTPUT_SHAPE).to_string()
}

fn strip_weekday(text: &str) -> &str {
    match text.split_once(", ") {
        Some((head, rest)) if head.parse::<Weekday>().is_ok() => rest,
        _ => text,
    }
}
