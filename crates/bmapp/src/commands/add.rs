use crate::commands::helpers::{
    ensure_initialized, find_bookmark, validate_name, validate_path_width,
};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BmError, Result};
use crate::model::Bookmark;
use crate::resolve::resolve_path;
use crate::store::DataStore;
use std::path::Path;

pub fn run<S: DataStore>(
    store: &mut S,
    home: Option<&Path>,
    name: &str,
    path: &str,
) -> Result<CmdResult> {
    ensure_initialized(store)?;
    validate_name(name)?;

    let resolved = resolve_path(path, home)?;
    validate_path_width(&resolved)?;

    let mut bookmarks = store.load()?;
    if let Some(existing) = find_bookmark(&bookmarks, name) {
        return Err(BmError::DuplicateName {
            name: name.to_string(),
            existing: bookmarks[existing].path.clone(),
        });
    }

    bookmarks.try_reserve(1)?;
    bookmarks.push(Bookmark::new(name, resolved));
    store.save(&bookmarks)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Bookmark added successfully!"));
    Ok(result)
}
