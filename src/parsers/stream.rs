use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::clipping::parse_clipping;
use crate::error::ClipError;
use crate::models::{ParseResult, UnparseableClipping};

/// Line separating two blocks in a clippings file
pub const BLOCK_DELIMITER: &str = "==========";

/// Open a clippings file and return a lazy stream over its blocks
///
/// Fails only if the file cannot be opened; per-block failures are yielded as
/// [`ParseResult::Unparseable`] by the stream itself.
pub fn clippings_from_path(path: &Path) -> Result<ClippingStream<BufReader<File>>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open clippings file: {}", path.display()))?;
    debug!(path = %path.display(), "opened clippings file");

    Ok(ClippingStream::new(BufReader::new(file)))
}

/// Stream over in-memory clippings content
pub fn clippings_from_str(content: &str) -> ClippingStream<&[u8]> {
    ClippingStream::new(content.as_bytes())
}

/// Lazily splits a reader into delimiter-separated blocks and parses one block per item
///
/// Every block yields exactly one [`ParseResult`]. A read error ends the stream after
/// yielding the partially read block as unparseable. The reader is dropped with the
/// stream, so abandoning iteration releases the file.
pub struct ClippingStream<R> {
    reader: R,
    next_block: usize,
    line_number: usize,
    parsed: usize,
    failed: usize,
    finished: bool,
    summarized: bool,
}

impl<R: BufRead> ClippingStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            next_block: 0,
            line_number: 0,
            parsed: 0,
            failed: 0,
            finished: false,
            summarized: false,
        }
    }

    /// Number of blocks parsed successfully so far
    pub fn parsed_count(&self) -> usize {
        self.parsed
    }

    /// Number of blocks yielded as unparseable so far
    pub fn failed_count(&self) -> usize {
        self.failed
    }

    /// Read raw lines up to the next delimiter or end of input
    ///
    /// Returns `Ok(None)` at end of input when only blank lines remain.
    fn read_block(&mut self) -> Result<Option<Vec<String>>, (Vec<String>, io::Error)> {
        let mut lines = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match self.reader.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    self.finished = true;
                    if lines.iter().all(|line: &String| line.trim().is_empty()) {
                        return Ok(None);
                    }
                    return Ok(Some(lines));
                }
                Ok(_) => {
                    self.line_number += 1;
                    let line = String::from_utf8_lossy(&buf).into_owned();
                    if is_delimiter(&line) {
                        return Ok(Some(lines));
                    }
                    lines.push(line);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.finished = true;
                    return Err((lines, e));
                }
            }
        }
    }

    /// Log the end-of-stream summary the first time the stream runs dry
    fn summarize(&mut self) {
        if !self.summarized {
            self.summarized = true;
            debug!(parsed = self.parsed, failed = self.failed, "finished reading clippings");
        }
    }

    fn unparseable(
        &mut self,
        lineno: usize,
        start_line: usize,
        error: ClipError,
        original_lines: Vec<String>,
    ) -> ParseResult {
        warn!(block = lineno, line = start_line, error = %error, "unparseable clipping");
        self.failed += 1;
        ParseResult::Unparseable(UnparseableClipping { lineno, start_line, error, original_lines })
    }
}

impl<R: BufRead> Iterator for ClippingStream<R> {
    type Item = ParseResult;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            self.summarize();
            return None;
        }

        let start_line = self.line_number;
        let lineno = self.next_block;
        let block = self.read_block();
        self.next_block += 1;

        let result = match block {
            Ok(Some(lines)) => match parse_clipping(&lines) {
                Ok(clipping) => {
                    self.parsed += 1;
                    ParseResult::Clipping(clipping)
                }
                Err(error) => self.unparseable(lineno, start_line, error, lines),
            },
            Ok(None) => {
                self.summarize();
                return None;
            }
            Err((lines, e)) => {
                self.unparseable(lineno, start_line, ClipError::Io(e.to_string()), lines)
            }
        };

        Some(result)
    }
}

impl<R: BufRead> FusedIterator for ClippingStream<R> {}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == BLOCK_DELIMITER
}
