//! Serializes clippings back into the Kindle text shape.
//!
//! Output is kept consistent with the grammar in [`crate::parsers`], so for every
//! representable clipping `parse_clipping(&kindle_lines(&c)) == Ok(c)`.

use std::io::{self, Write};

use crate::models::Clipping;
use crate::parsers::datetime::format_kindle_datetime;
use crate::parsers::stream::BLOCK_DELIMITER;

/// Lines of one block, each ending in `\n`: book line, metadata line, blank separator,
/// then the body lines
pub fn kindle_lines(clipping: &Clipping) -> Vec<String> {
    let mut lines = vec![book_line(clipping), meta_line(clipping), "\n".to_string()];
    lines.extend(clipping.clip_text.split_inclusive('\n').map(str::to_string));
    lines
}

fn book_line(clipping: &Clipping) -> String {
    if clipping.author.is_empty() {
        format!("{}\n", clipping.title)
    } else {
        format!("{} ({})\n", clipping.title, clipping.author)
    }
}

fn meta_line(clipping: &Clipping) -> String {
    let page = clipping.page.map(|page| format!(" on Page {} |", page)).unwrap_or_default();
    format!(
        "- Your {}{} Location {} | Added on {}\n",
        clipping.clip_type.kindle_keyword(),
        page,
        clipping.loc_range,
        format_kindle_datetime(&clipping.datetime)
    )
}

/// Write clippings as complete blocks, each followed by the delimiter line
pub fn write_clippings<'a, W, I>(writer: &mut W, clippings: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Clipping>,
{
    for clipping in clippings {
        write_block(writer, &kindle_lines(clipping))?;
    }
    Ok(())
}

/// Write raw block lines followed by the delimiter line
///
/// A final line without a terminator gets one so the delimiter stays on its own line.
pub fn write_block<W: Write, S: AsRef<str>>(writer: &mut W, lines: &[S]) -> io::Result<()> {
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
    }
    if lines.last().is_some_and(|line| !line.as_ref().ends_with('\n')) {
        writer.write_all(b"\n")?;
    }
    writeln!(writer, "{}", BLOCK_DELIMITER)
}

impl Clipping {
    /// See [`kindle_lines`]
    pub fn to_kindle_lines(&self) -> Vec<String> {
        kindle_lines(self)
    }
}
