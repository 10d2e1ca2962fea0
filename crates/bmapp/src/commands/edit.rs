use crate::commands::helpers::{
    ensure_initialized, find_existing, load_non_empty, validate_path_width,
};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::resolve::resolve_path;
use crate::store::DataStore;
use std::path::Path;

/// Point an existing bookmark at a new path. The name is untouched.
pub fn run<S: DataStore>(
    store: &mut S,
    home: Option<&Path>,
    name: &str,
    new_path: &str,
) -> Result<CmdResult> {
    ensure_initialized(store)?;
    let resolved = resolve_path(new_path, home)?;
    let mut bookmarks = load_non_empty(store)?;

    let index = find_existing(&bookmarks, name, &resolved)?;
    validate_path_width(&resolved)?;

    bookmarks[index].path = resolved;
    store.save(&bookmarks)?;

    let edited = &bookmarks[index];
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Bookmark '{}' has been edited successfully!",
        edited.name
    )));
    result.add_message(CmdMessage::info(format!(
        "'{}' --> {}",
        edited.name, edited.path
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, go};
    use crate::error::BmError;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::TestEnv;

    #[test]
    fn go_returns_new_path_after_edit() {
        let env = TestEnv::new();
        let (old, new) = (env.dir("myproj"), env.dir("other"));
        let mut store = InMemoryStore::initialized();
        add::run(&mut store, None, "proj", &old).unwrap();

        let result = run(&mut store, None, "PROJ", &new).unwrap();

        assert_eq!(go::run(&store, "proj").unwrap().resolved_path, Some(new.clone()));
        assert_eq!(result.messages[1].content, format!("'proj' --> {new}"));
    }

    #[test]
    fn missing_bookmark_suggests_add_with_resolved_path() {
        let env = TestEnv::new();
        let dir = env.dir("x");
        let mut store = InMemoryStore::initialized();
        add::run(&mut store, None, "other", &env.dir("o")).unwrap();

        match run(&mut store, Some(env.home.as_path()), "nope", "~/x") {
            Err(BmError::NotFound { suggested, .. }) => assert_eq!(suggested, dir),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn invalid_path_checked_before_lookup() {
        let env = TestEnv::new();
        let mut store = InMemoryStore::initialized();
        let missing = env.home.join("missing");
        assert!(matches!(
            run(&mut store, None, "proj", missing.to_str().unwrap()),
            Err(BmError::InvalidPath { .. })
        ));
    }

    #[test]
    fn path_too_long_leaves_bookmark_alone() {
        let env = TestEnv::new();
        let dir = env.dir("p");
        let long = env.dir_with_len(512);
        let mut store = InMemoryStore::initialized();
        add::run(&mut store, None, "proj", &dir).unwrap();

        assert!(matches!(
            run(&mut store, None, "proj", &long),
            Err(BmError::PathTooLong(_))
        ));
        assert_eq!(go::run(&store, "proj").unwrap().resolved_path, Some(dir));
    }

    #[test]
    fn empty_and_uninitialized() {
        let env = TestEnv::new();
        let dir = env.dir("p");
        assert!(matches!(
            run(&mut InMemoryStore::initialized(), None, "proj", &dir),
            Err(BmError::Empty)
        ));
        assert!(matches!(
            run(&mut InMemoryStore::new(), None, "proj", &dir),
            Err(BmError::NotInitialized)
        ));
    }
}
