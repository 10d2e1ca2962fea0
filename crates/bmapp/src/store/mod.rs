//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between command logic and persistence.
//! Commands only ever see whole lists: load everything, change it, save
//! everything back.
//!
//! ## Philosophy
//!
//! - **The file is the truth**: nothing is cached between invocations. Every
//!   command rebuilds its list from `bookmarks.tsv`.
//! - **Whole-file rewrite**: `save` replaces the entire file. There is no
//!   append path and no partial update.
//! - **No locking**: two `bm` processes mutating at the same time race, and
//!   the last one to save wins. The other update is lost.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store at `$HOME/.bm/bookmarks.tsv`.
//! - [`memory::InMemoryStore`]: for testing command logic without a home
//!   directory. It keeps the file contents as a string and goes through the
//!   same [`tsv`] codec, so round-trip behavior is identical.

use crate::error::Result;
use crate::model::Bookmark;
use std::path::Path;

pub mod fs;
pub mod memory;
pub mod tsv;

/// Abstract interface for bookmark storage.
pub trait DataStore {
    /// Whether the backing file exists.
    fn is_initialized(&self) -> bool;

    /// Create the backing file containing only the header line.
    /// Callers check [`DataStore::is_initialized`] first.
    fn initialize(&mut self) -> Result<()>;

    /// Load all bookmarks in file order. A missing file yields an empty list.
    fn load(&self) -> Result<Vec<Bookmark>>;

    /// Replace the stored bookmarks with `bookmarks`.
    fn save(&mut self, bookmarks: &[Bookmark]) -> Result<()>;

    /// Location of the backing file (virtual for in-memory stores).
    fn location(&self) -> &Path;
}
