//! Kindle Clippings - Parse and reformat Kindle "My Clippings.txt" exports
//!
//! This library turns the highlights, notes, and bookmarks a Kindle appends to
//! `My Clippings.txt` into structured records. It supports:
//!
//! - Parsing the book (title and author) and metadata lines of each clipping block
//! - The several `Added on` datetime shapes emitted by different device generations
//! - Lazily streaming a whole file, yielding one result per block without stopping on
//!   malformed blocks
//! - Formatting records back into the Kindle text shape (round-trip)
//!
//! # Example
//!
//! ```no_run
//! use kindle_clippings::{ParseResult, clippings_from_path};
//! use std::path::Path;
//!
//! for result in clippings_from_path(Path::new("My Clippings.txt"))? {
//!     match result {
//!         ParseResult::Clipping(clipping) => println!("{}: {}", clipping.title, clipping.clip_text),
//!         ParseResult::Unparseable(bad) => eprintln!("block {}: {}", bad.lineno, bad.error),
//!     }
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod formatter;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use error::{ClipError, ErrorKind};
pub use formatter::{kindle_lines, write_clippings};
pub use models::{ClipType, Clipping, LocationRange, ParseResult, UnparseableClipping};
pub use parsers::{
    ClippingStream, clippings_from_path, clippings_from_str, parse_book_line, parse_clipping,
    parse_kindle_datetime, parse_meta_line,
};
