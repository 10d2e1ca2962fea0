use crate::commands::helpers::{ensure_initialized, find_existing, load_non_empty};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Resolve a bookmark name to its stored path. Read-only; produces no messages
/// so callers can print the path alone.
pub fn run<S: DataStore>(store: &S, name: &str) -> Result<CmdResult> {
    ensure_initialized(store)?;
    let mut bookmarks = load_non_empty(store)?;

    let index = find_existing(&bookmarks, name, "<path>")?;
    let bookmark = bookmarks.swap_remove(index);
    Ok(CmdResult::default().with_resolved_path(bookmark.path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BmError;
    use crate::model::Bookmark;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn resolves_case_insensitively() {
        let store = InMemoryStore::with_bookmarks(&[
            Bookmark::new("Name", "/srv/name"),
            Bookmark::new("other", "/srv/other"),
        ]);

        for query in ["Name", "NAME", "name"] {
            let result = run(&store, query).unwrap();
            assert_eq!(result.resolved_path.as_deref(), Some("/srv/name"));
            assert!(result.messages.is_empty());
        }
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn unknown_name() {
        let store = InMemoryStore::with_bookmarks(&[Bookmark::new("a", "/a")]);
        assert!(matches!(run(&store, "b"), Err(BmError::NotFound { .. })));
    }

    #[test]
    fn empty_and_uninitialized() {
        assert!(matches!(
            run(&InMemoryStore::initialized(), "a"),
            Err(BmError::Empty)
        ));
        assert!(matches!(
            run(&InMemoryStore::new(), "a"),
            Err(BmError::NotInitialized)
        ));
    }
}
