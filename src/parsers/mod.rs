//! Parsers for Kindle `My Clippings.txt` files
//!
//! # Layout
//!
//! A file is a sequence of blocks separated by a line of ten `=` characters. Each block is
//! a book line, a metadata line, an optional blank line, and zero or more body lines.
//!
//! - [`book`] splits the book line into title and author
//! - [`meta`] parses the metadata line (type, page, location, `Added on` datetime)
//! - [`datetime`] handles the datetime shapes devices have emitted over the years
//! - [`clipping`] assembles one block into a [`Clipping`](crate::models::Clipping)
//! - [`stream`] splits a file into blocks and parses them lazily
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach:
//!
//! - **Individual block failures**: The block parsers return a [`ClipError`](crate::ClipError)
//!   and never repair input. The stream converts each failure into an
//!   [`UnparseableClipping`](crate::models::UnparseableClipping) carrying the raw lines, logs
//!   a warning, and moves on to the next block.
//!
//! - **Fatal failures**: Only failing to open the file is fatal, reported as an
//!   `anyhow::Error` before any block is yielded.

pub mod book;
pub mod clipping;
pub mod datetime;
pub mod meta;
pub mod stream;

pub use book::parse_book_line;
pub use clipping::parse_clipping;
pub use datetime::parse_kindle_datetime;
pub use meta::{ClipMeta, parse_meta_line};
pub use stream::{ClippingStream, clippings_from_path, clippings_from_str};
