use crate::commands::helpers::{ensure_initialized, find_existing, load_non_empty};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    ensure_initialized(store)?;
    let mut bookmarks = load_non_empty(store)?;

    let index = find_existing(&bookmarks, name, "<path>")?;
    let removed = bookmarks.remove(index);
    store.save(&bookmarks)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Bookmark '{}' deleted successfully!",
        removed.name
    )));
    Ok(result)
}
