use super::styles::{INFO, SUCCESS};
use bmapp::commands::{CmdMessage, MessageLevel};
use bmapp::model::{pad_to_width, Bookmark, MAX_NAME_WIDTH};
use unicode_width::UnicodeWidthStr;

const NAME_HEADER: &str = " Bookmark Name";
const PATH_HEADER: &str = "Directory Path";

pub const EMPTY_TABLE: &str = "\
+------------------+------------------+
|  Bookmark Name   |  Directory Path  |
+------------------+------------------+
|          No bookmarks yet           |
+------------------+------------------+
";

/// Renders the list as a bordered table. The path column is as wide as the
/// longest path (never narrower than its header). Long names push their row
/// wider rather than being cut.
pub fn render_bookmark_table(bookmarks: &[Bookmark]) -> String {
    if bookmarks.is_empty() {
        return EMPTY_TABLE.to_string();
    }

    let path_width = bookmarks
        .iter()
        .map(|b| b.path.width())
        .chain(std::iter::once(PATH_HEADER.width()))
        .max()
        .unwrap_or_default();

    let border = format!(
        "+{}+{}+\n",
        "-".repeat(MAX_NAME_WIDTH + 2),
        "-".repeat(path_width + 2)
    );
    let row = |name: &str, path: &str| {
        format!(
            "| {} | {} |\n",
            pad_to_width(name, MAX_NAME_WIDTH),
            pad_to_width(path, path_width)
        )
    };

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&row(NAME_HEADER, PATH_HEADER));
    out.push_str(&border);
    for bookmark in bookmarks {
        out.push_str(&row(&bookmark.name, &bookmark.path));
    }
    out.push_str(&border);
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        let style = match message.level {
            MessageLevel::Success => &*SUCCESS,
            MessageLevel::Info => &*INFO,
        };
        println!("{}", style.apply_to(&message.content));
    }
}
