use crate::error::{BmError, Result};
use crate::model::{display_width, is_valid_name, Bookmark, MAX_NAME_WIDTH, MAX_PATH_WIDTH};
use crate::store::DataStore;

pub fn ensure_initialized<S: DataStore>(store: &S) -> Result<()> {
    if store.is_initialized() {
        Ok(())
    } else {
        Err(BmError::NotInitialized)
    }
}

/// Load the list for a command that needs at least one bookmark.
pub fn load_non_empty<S: DataStore>(store: &S) -> Result<Vec<Bookmark>> {
    let bookmarks = store.load()?;
    if bookmarks.is_empty() {
        return Err(BmError::Empty);
    }
    Ok(bookmarks)
}

/// Position of the first bookmark whose name folds to the same value as `name`.
pub fn find_bookmark(bookmarks: &[Bookmark], name: &str) -> Option<usize> {
    bookmarks.iter().position(|b| b.matches(name))
}

/// Like [`find_bookmark`], but a miss is a `NotFound` suggesting how to add it.
pub fn find_existing(bookmarks: &[Bookmark], name: &str, suggested_path: &str) -> Result<usize> {
    find_bookmark(bookmarks, name).ok_or_else(|| BmError::NotFound {
        name: name.to_string(),
        suggested: suggested_path.to_string(),
    })
}

pub fn validate_name(name: &str) -> Result<()> {
    if !is_valid_name(name) {
        return Err(BmError::InvalidName(name.to_string()));
    }
    if display_width(name) > MAX_NAME_WIDTH {
        return Err(BmError::NameTooLong(name.to_string()));
    }
    Ok(())
}

pub fn validate_path_width(path: &str) -> Result<()> {
    if display_width(path) > MAX_PATH_WIDTH {
        return Err(BmError::PathTooLong(path.to_string()));
    }
    Ok(())
}
