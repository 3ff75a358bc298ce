use crate::error::ClipError;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Split a clipping's first line into `(title, author)`
///
/// The author is the content of a parenthetical group that ends the line. Earlier
/// parentheses (series annotations like `Quicksilver (The Baroque Cycle Book 1)`) stay
/// in the title. Author is empty when there is no trailing group or the group is blank.
pub fn parse_book_line(line: &str) -> Result<(String, String), ClipError> {
    let line = line.trim_start_matches(BYTE_ORDER_MARK).trim();
    if line.is_empty() {
        return Err(ClipError::EmptyBookLine);
    }

    match trailing_group_start(line) {
        Some(open) => {
            let title = line[..open].trim_end();
            let author = line[open + 1..line.len() - 1].trim();
            Ok((title.to_string(), author.to_string()))
        }
        None => Ok((line.to_string(), String::new())),
    }
}

/// Byte offset of the `(` matching the line's final `)`, if the line ends with one
fn trailing_group_start(line: &str) -> Option<usize> {
    if !line.ends_with(')') {
        return None;
    }

    let mut depth = 0usize;
    for (idx, ch) in line.char_indices().rev() {
        match ch {
            ')' => depth += 1,
            '(' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}
