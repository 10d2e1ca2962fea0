//! Wires the production API together from the environment.
//!
//! The only input is `HOME` (see [`crate::config`]). Resolving it here, once,
//! means commands and the API never read the environment themselves.

use crate::api::BmApi;
use crate::config::BmPaths;
use crate::error::Result;
use crate::store::fs::FileStore;

pub struct BmContext {
    pub api: BmApi<FileStore>,
    pub paths: BmPaths,
}

pub fn initialize(paths: BmPaths) -> BmContext {
    log::debug!("using store at {}", paths.file.display());
    let api = BmApi::new(FileStore::new(paths.clone()), Some(paths.home.clone()));
    BmContext { api, paths }
}

/// Fails with `HomeNotSet` when `HOME` is missing or empty.
pub fn initialize_from_env() -> Result<BmContext> {
    BmPaths::from_env().map(initialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataStore;
    use tempfile::tempdir;

    #[test]
    fn context_points_at_home_store() {
        let temp = tempdir().unwrap();
        let mut ctx = initialize(BmPaths::from_home(temp.path()));

        assert_eq!(ctx.api.home(), Some(temp.path()));
        assert_eq!(
            ctx.api.store().location(),
            temp.path().join(".bm").join("bookmarks.tsv")
        );

        ctx.api.init().unwrap();
        assert!(ctx.paths.file.is_file());
    }
}
