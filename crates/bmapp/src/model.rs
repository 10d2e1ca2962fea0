use unicode_width::UnicodeWidthStr;

/// Longest bookmark name, in visible terminal columns.
pub const MAX_NAME_WIDTH: usize = 15;

/// Longest stored path, in visible terminal columns.
pub const MAX_PATH_WIDTH: usize = 511;

/// A name → directory mapping.
///
/// `path` is always the canonical form produced by [`crate::resolve::resolve_path`];
/// nothing else should construct bookmarks for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub name: String,
    pub path: String,
}

impl Bookmark {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Case-insensitive name comparison used for lookup and uniqueness.
    pub fn matches(&self, name: &str) -> bool {
        fold(&self.name) == fold(name)
    }
}

/// Normalizes a name for comparison.
pub fn fold(name: &str) -> String {
    name.to_lowercase()
}

/// Visible width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Right-pads `s` with spaces to `width` columns. Never truncates.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    let mut out = String::with_capacity(s.len() + padding);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(padding));
    out
}

/// Whether `name` can be written as the first field of a store line and
/// passed back on the command line. A leading `-` would parse as a flag.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name.trim_end() == name
        && !name.starts_with('-')
        && !name.chars().any(char::is_control)
}
