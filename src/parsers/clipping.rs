use super::book::parse_book_line;
use super::meta::parse_meta_line;
use crate::error::ClipError;
use crate::models::Clipping;

/// Title line, metadata line, and at least one separator or body line
const MIN_BLOCK_LINES: usize = 3;

/// Assemble a [`Clipping`] from the raw lines of one block
///
/// Lines keep their terminators. If the third line is blank it separates the header from
/// the body and is dropped; otherwise the body starts there. Body lines are joined
/// unchanged, so embedded and trailing newlines survive.
pub fn parse_clipping<S: AsRef<str>>(lines: &[S]) -> Result<Clipping, ClipError> {
    if lines.len() < MIN_BLOCK_LINES {
        return Err(ClipError::InsufficientLines(lines.len()));
    }

    let (title, author) = parse_book_line(lines[0].as_ref())?;
    let meta = parse_meta_line(lines[1].as_ref())?;

    let body = if is_blank_line(lines[2].as_ref()) { &lines[3..] } else { &lines[2..] };
    let clip_text = body.iter().map(|line| line.as_ref()).collect::<String>();

    Ok(Clipping {
        title,
        author,
        clip_type: meta.clip_type,
        page: meta.page,
        loc_range: meta.loc_range,
        datetime: meta.datetime,
        clip_text,
    })
}

fn is_blank_line(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']).is_empty()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::{ClipType, LocationRange};

    const BOOK: &str = "Four Fish: The Future of the Last Wild Food (Greenberg, Paul)";
    const META: &str = "- Your Highlight on Page 12 | Location 203-206 | Added on Saturday, December 24, 2011, 03:24 PM";
    const TEXT: &str = "In cases where grounds have been seemingly tapped out, ten years’ rest has sometimes been enough to restore them to at least some of their former glory.";

    fn expected(clip_text: &str) -> Clipping {
        Clipping {
            title: "Four Fish: The Future of the Last Wild Food".to_string(),
            author: "Greenberg, Paul".to_string(),
            clip_type: ClipType::Highlight,
            page: Some(12),
            loc_range: LocationRange { start: 203, end: 206 },
            datetime: NaiveDate::from_ymd_opt(2011, 12, 24).unwrap().and_hms_opt(15, 24, 0).unwrap(),
            clip_text: clip_text.to_string(),
        }
    }

    #[test]
    fn test_blank_separator_is_dropped() {
        let clipping = parse_clipping(&[BOOK, META, "\n", TEXT]).unwrap();
        assert_eq!(clipping, expected(TEXT));
    }

    #[test]
    fn test_non_blank_third_line_starts_body() {
        let clipping = parse_clipping(&[BOOK, META, "Normally a blank line\n", TEXT]).unwrap();
        assert_eq!(clipping, expected(&format!("Normally a blank line\n{}", TEXT)));
    }

    #[test]
    fn test_multiline_body_keeps_newlines() {
        let lines = vec![
            format!("{}\r\n", BOOK),
            format!("{}\r\n", META),
            "\r\n".to_string(),
            "first line\r\n".to_string(),
            "\r\n".to_string(),
            "second line\r\n".to_string(),
        ];
        let clipping = parse_clipping(&lines).unwrap();
        assert_eq!(clipping.clip_text, "first line\r\n\r\nsecond line\r\n");
    }

    #[test]
    fn test_bookmark_has_empty_body() {
        let lines = [
            "Some Book (Someone)\n",
            "- Your Bookmark Location 3442 | Added on Wednesday, June 1, 2016 10:25:25 PM\n",
            "\n",
        ];
        let clipping = parse_clipping(&lines).unwrap();
        assert_eq!(clipping.clip_type, ClipType::Bookmark);
        assert_eq!(clipping.clip_text, "");
    }

    #[test]
    fn test_insufficient_lines() {
        let err = parse_clipping(&[BOOK, META]).unwrap_err();
        assert_eq!(err, ClipError::InsufficientLines(2));
        assert!(err.to_string().starts_with("insufficient strings to constitute a clipping"));

        let empty: [&str; 0] = [];
        assert_eq!(parse_clipping(&empty).unwrap_err(), ClipError::InsufficientLines(0));
    }

    #[test]
    fn test_sub_parser_errors_propagate_unchanged() {
        let meta = "- Your Highlight on Page 54 | Location 203-206 | Added on Saturday, MISSING_MONTH 24, 2011, 03:24 PM";
        let err = parse_clipping(&[BOOK, meta, "Normally a blank line\n", TEXT]).unwrap_err();
        assert!(matches!(err, ClipError::UnrecognizedDatetime(_)), "got {:?}", err);

        let err = parse_clipping(&["\n", META, "\n", TEXT]).unwrap_err();
        assert_eq!(err, ClipError::EmptyBookLine);
    }
}
