//! Line format of `bookmarks.tsv`.
//!
//! ```text
//! Bookmark Name\tDirectory Path
//! proj           \t/home/ada/src/proj
//! ```
//!
//! Names are right-padded to [`MAX_NAME_WIDTH`] so the file lines up when
//! viewed directly. Parsing splits on the first tab and trims the name, so it
//! never depends on the padding or on a column offset.

use crate::error::Result;
use crate::model::{pad_to_width, Bookmark, MAX_NAME_WIDTH};

pub const HEADER: &str = "Bookmark Name\tDirectory Path";

/// Parse the full file contents. The first line is the header and is skipped.
pub fn parse(text: &str) -> Result<Vec<Bookmark>> {
    let mut lines = text.lines();
    if let Some(first) = lines.next() {
        if first != HEADER {
            log::debug!("unexpected header line {first:?}, skipping it anyway");
        }
    }

    let mut bookmarks = Vec::new();
    bookmarks.try_reserve_exact(lines.clone().count())?;

    for line in lines {
        match parse_line(line) {
            Some(bookmark) => bookmarks.push(bookmark),
            None if line.trim().is_empty() => {}
            None => log::debug!("skipping malformed line {line:?}"),
        }
    }
    Ok(bookmarks)
}

fn parse_line(line: &str) -> Option<Bookmark> {
    let (name, path) = line.split_once('\t')?;
    let name = name.trim_end();
    if name.is_empty() || path.is_empty() {
        return None;
    }
    Some(Bookmark::new(name, path))
}

/// Render the full file contents: header, then one line per bookmark.
pub fn format(bookmarks: &[Bookmark]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + bookmarks.len() * 64);
    out.push_str(HEADER);
    out.push('\n');
    for bookmark in bookmarks {
        out.push_str(&pad_to_width(&bookmark.name, MAX_NAME_WIDTH));
        out.push('\t');
        out.push_str(&bookmark.path);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only_file_is_empty() {
        assert!(parse("Bookmark Name\tDirectory Path\n").unwrap().is_empty());
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn format_pads_names_to_fixed_width() {
        let text = format(&[Bookmark::new("proj", "/srv/proj")]);
        assert_eq!(
            text,
            "Bookmark Name\tDirectory Path\nproj           \t/srv/proj\n"
        );
    }

    #[test]
    fn parse_strips_padding() {
        let text = "Bookmark Name\tDirectory Path\nproj           \t/srv/proj\n";
        assert_eq!(parse(text).unwrap(), vec![Bookmark::new("proj", "/srv/proj")]);
    }

    #[test]
    fn parse_does_not_assume_column_offset() {
        let text = "Bookmark Name\tDirectory Path\na\t/a\nlonger-than-fifteen\t/b\n";
        let bookmarks = parse(text).unwrap();
        assert_eq!(bookmarks[0], Bookmark::new("a", "/a"));
        assert_eq!(bookmarks[1], Bookmark::new("longer-than-fifteen", "/b"));
    }

    #[test]
    fn path_keeps_everything_after_first_tab() {
        let text = "Bookmark Name\tDirectory Path\ndocs\t/home/ada/My Documents\n";
        assert_eq!(parse(text).unwrap()[0].path, "/home/ada/My Documents");
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let text = "Bookmark Name\tDirectory Path\nno-tab-here\n\n   \t/x\nname\t\nok\t/ok\n";
        assert_eq!(parse(text).unwrap(), vec![Bookmark::new("ok", "/ok")]);
    }

    #[test]
    fn crlf_line_endings_are_tolerated() {
        let text = "Bookmark Name\tDirectory Path\r\nproj\t/srv/proj\r\n";
        assert_eq!(parse(text).unwrap()[0].path, "/srv/proj");
    }

    #[test]
    fn order_is_preserved() {
        let bookmarks = vec![
            Bookmark::new("zeta", "/z"),
            Bookmark::new("alpha", "/a"),
            Bookmark::new("mid", "/m"),
        ];
        assert_eq!(parse(&format(&bookmarks)).unwrap(), bookmarks);
    }

    #[test]
    fn rewriting_is_idempotent() {
        // Hand-edited file with odd padding normalizes once and then stays put.
        let hand_edited = "Bookmark Name\tDirectory Path\nproj  \t/srv/proj\nhome\t/home/ada\n";
        let first = format(&parse(hand_edited).unwrap());
        let second = format(&parse(&first).unwrap());
        assert_eq!(first, second);
    }
}
