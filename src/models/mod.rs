//! Data models for parsed Kindle clippings.
//!
//! - [`Clipping`] - A highlight, note, or bookmark parsed from one block
//! - [`UnparseableClipping`] - A block that failed to parse, with its raw lines
//! - [`ParseResult`] - Tagged outcome of parsing one block
//!
//! All models serialize with serde so they can be exported as JSON.

pub mod clipping;

pub use clipping::{ClipType, Clipping, LocationRange, ParseResult, UnparseableClipping};
