//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for synthetic `My Clippings.txt` files inside a temp directory
pub struct ClippingsFileBuilder {
    temp_dir: TempDir,
    content: String,
}

impl ClippingsFileBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, content: String::new() }
    }

    /// Start the file with a UTF-8 byte-order mark, as devices do
    pub fn with_bom(mut self) -> Self {
        self.content.insert(0, '\u{feff}');
        self
    }

    /// Append a block built programmatically
    pub fn with_block(self, block: &BlockBuilder) -> Self {
        self.with_raw_block(&block.to_text())
    }

    /// Append raw block text (without the delimiter)
    pub fn with_raw_block(mut self, text: &str) -> Self {
        self.content.push_str(text);
        if !text.ends_with('\n') {
            self.content.push('\n');
        }
        self.content.push_str("==========\n");
        self
    }

    /// Append arbitrary text with no delimiter
    pub fn with_raw(mut self, text: &str) -> Self {
        self.content.push_str(text);
        self
    }

    /// Write "My Clippings.txt" and return the temp dir with its path
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("My Clippings.txt");
        fs::write(&path, self.content).expect("Failed to write clippings file");
        (self.temp_dir, path)
    }
}

impl Default for ClippingsFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one well-formed clipping block
pub struct BlockBuilder {
    book: String,
    clip_type: String,
    page: Option<u32>,
    location: String,
    added_on: String,
    body: String,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            book: "Test Book (Author, Test)".to_string(),
            clip_type: "Highlight".to_string(),
            page: None,
            location: "100-101".to_string(),
            added_on: "Friday, December 12, 2014, 08:51 AM".to_string(),
            body: "Highlighted text\n".to_string(),
        }
    }

    pub fn book(mut self, book: &str) -> Self {
        self.book = book.to_string();
        self
    }

    pub fn clip_type(mut self, clip_type: &str) -> Self {
        self.clip_type = clip_type.to_string();
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn added_on(mut self, added_on: &str) -> Self {
        self.added_on = added_on.to_string();
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    pub fn to_text(&self) -> String {
        let page = self.page.map(|p| format!(" on Page {} |", p)).unwrap_or_default();
        format!(
            "{}\n- Your {}{} Location {} | Added on {}\n\n{}",
            self.book, self.clip_type, page, self.location, self.added_on, self.body
        )
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Path that is guaranteed not to exist
pub fn nonexistent_path(dir: &Path) -> PathBuf {
    dir.join("NONEXISTENT_FILE")
}
