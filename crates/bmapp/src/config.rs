//! # Configuration
//!
//! bm has exactly one configuration input: the `HOME` environment variable.
//! Everything else is derived from it once per invocation and carried around
//! as a plain [`BmPaths`] value, so nothing downstream touches the environment.
//!
//! ## Storage Layout
//!
//! ```text
//! $HOME/
//! └── .bm/
//!     └── bookmarks.tsv   # header line + one `name<TAB>path` line per bookmark
//! ```
//!
//! An unset (or empty) `HOME` is a hard failure for anything that needs the
//! backing file.

use crate::error::{BmError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "HOME";
pub const STORE_DIR_NAME: &str = ".bm";
pub const STORE_FILE_NAME: &str = "bookmarks.tsv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmPaths {
    pub home: PathBuf,
    pub dir: PathBuf,
    pub file: PathBuf,
}

impl BmPaths {
    pub fn from_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let dir = home.join(STORE_DIR_NAME);
        let file = dir.join(STORE_FILE_NAME);
        Self { home, dir, file }
    }

    /// Resolve from a raw `HOME` value, as read from the environment.
    pub fn from_home_var(value: Option<OsString>) -> Result<Self> {
        home_from_var(value)
            .map(Self::from_home)
            .ok_or(BmError::HomeNotSet)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_home_var(std::env::var_os(HOME_ENV))
    }

    pub fn home(&self) -> &Path {
        &self.home
    }
}

/// Empty values count as unset.
pub fn home_from_var(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
