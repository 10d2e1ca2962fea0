use super::{tsv, DataStore};
use crate::error::{BmError, Result};
use crate::model::Bookmark;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory store for testing.
///
/// Holds the would-be file contents as a string and encodes/decodes through
/// [`tsv`], so it behaves like [`super::fs::FileStore`] minus the disk.
pub struct InMemoryStore {
    contents: Option<String>,
    location: PathBuf,
    simulate_write_error: bool,
    saves: usize,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            contents: None,
            location: PathBuf::from("/virtual/.bm/bookmarks.tsv"),
            simulate_write_error: false,
            saves: 0,
        }
    }
}

impl InMemoryStore {
    /// A store that has not been through `init`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding only the header line.
    pub fn initialized() -> Self {
        Self {
            contents: Some(tsv::format(&[])),
            ..Self::default()
        }
    }

    pub fn with_bookmarks(bookmarks: &[Bookmark]) -> Self {
        Self {
            contents: Some(tsv::format(bookmarks)),
            ..Self::default()
        }
    }

    /// Raw file contents, if initialized.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful saves, for asserting read-only commands stay read-only.
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// Make every subsequent write fail.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn write(&mut self, contents: String) -> Result<()> {
        if self.simulate_write_error {
            return Err(BmError::io(&self.location)(io::Error::other(
                "simulated write error",
            )));
        }
        self.contents = Some(contents);
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn is_initialized(&self) -> bool {
        self.contents.is_some()
    }

    fn initialize(&mut self) -> Result<()> {
        self.write(tsv::format(&[]))
    }

    fn load(&self) -> Result<Vec<Bookmark>> {
        match &self.contents {
            Some(text) => tsv::parse(text),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, bookmarks: &[Bookmark]) -> Result<()> {
        self.write(tsv::format(bookmarks))?;
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_uninitialized() {
        let store = InMemoryStore::new();
        assert!(!store.is_initialized());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn round_trips_through_the_codec() {
        let mut store = InMemoryStore::initialized();
        store.save(&[Bookmark::new("proj", "/srv/proj")]).unwrap();

        assert_eq!(
            store.contents().unwrap(),
            "Bookmark Name\tDirectory Path\nproj           \t/srv/proj\n"
        );
        assert_eq!(store.load().unwrap(), vec![Bookmark::new("proj", "/srv/proj")]);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn simulated_write_error_leaves_contents_alone() {
        let mut store = InMemoryStore::with_bookmarks(&[Bookmark::new("a", "/a")]);
        store.set_simulate_write_error(true);

        assert!(store.save(&[]).is_err());
        assert_eq!(store.load().unwrap().len(), 1);
        assert_eq!(store.saves(), 0);
    }
}
