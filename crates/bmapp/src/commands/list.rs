use crate::commands::helpers::ensure_initialized;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// All bookmarks in store order. Read-only.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    ensure_initialized(store)?;
    let bookmarks = store.load()?;
    Ok(CmdResult::default().with_listed_bookmarks(bookmarks))
}
