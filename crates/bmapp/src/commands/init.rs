use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Create the store unless it already exists. Running it twice is not an error.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.is_initialized() {
        result.add_message(CmdMessage::info("Bookmark system already initialized!"));
        return Ok(result);
    }

    store.initialize()?;
    result.add_message(CmdMessage::success("Bookmark system initialized!"));
    result.add_message(CmdMessage::info(format!(
        "Bookmarks are stored in {}",
        store.location().display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Bookmark;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::TestEnv;
    use std::fs;

    #[test]
    fn creates_header_only_store() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store).unwrap();

        assert!(store.is_initialized());
        assert_eq!(store.contents().unwrap(), "Bookmark Name\tDirectory Path\n");
        assert_eq!(result.messages[0].content, "Bookmark system initialized!");
    }

    #[test]
    fn second_init_is_a_no_op() {
        let mut store = InMemoryStore::with_bookmarks(&[Bookmark::new("a", "/a")]);
        let before = store.contents().unwrap().to_string();

        let result = run(&mut store).unwrap();

        assert_eq!(store.contents().unwrap(), before);
        assert_eq!(
            result.messages[0].content,
            "Bookmark system already initialized!"
        );
    }

    #[test]
    fn write_failure_is_reported() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        assert!(run(&mut store).is_err());
        assert!(!store.is_initialized());
    }

    #[test]
    fn initializes_on_disk_and_leaves_existing_file_alone() {
        let mut env = TestEnv::new();
        run(&mut env.store).unwrap();
        let path = env.home.join(".bm").join("bookmarks.tsv");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Bookmark Name\tDirectory Path\n"
        );

        fs::write(&path, "Bookmark Name\tDirectory Path\nx\t/x\n").unwrap();
        run(&mut env.store).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Bookmark Name\tDirectory Path\nx\t/x\n"
        );
    }
}
