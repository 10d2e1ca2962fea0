use crate::commands::helpers::{
    ensure_initialized, find_bookmark, find_existing, load_non_empty, validate_name,
};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BmError, Result};
use crate::store::DataStore;

/// Rename in place. The path and the bookmark's position are untouched.
pub fn run<S: DataStore>(store: &mut S, old_name: &str, new_name: &str) -> Result<CmdResult> {
    ensure_initialized(store)?;
    let mut bookmarks = load_non_empty(store)?;

    let index = find_existing(&bookmarks, old_name, "<path>")?;
    // Renaming a bookmark to a case variant of itself is fine.
    if let Some(other) = find_bookmark(&bookmarks, new_name).filter(|&i| i != index) {
        return Err(BmError::DuplicateName {
            name: new_name.to_string(),
            existing: bookmarks[other].path.clone(),
        });
    }
    validate_name(new_name)?;

    bookmarks[index].name = new_name.to_string();
    store.save(&bookmarks)?;

    let renamed = &bookmarks[index];
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Bookmark '{old_name}' has been renamed successfully!"
    )));
    result.add_message(CmdMessage::info(format!(
        "'{}' --> {}",
        renamed.name, renamed.path
    )));
    Ok(result)
}
