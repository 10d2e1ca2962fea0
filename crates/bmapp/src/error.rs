use crate::model::{MAX_NAME_WIDTH, MAX_PATH_WIDTH};
use std::collections::TryReserveError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a user-supplied path could not become a stored bookmark path.
#[derive(Error, Debug)]
pub enum PathProblem {
    #[error("Tilde paths must start with '~/' and point to an existing directory (e.g., ~/Desktop)")]
    Tilde,

    #[error("{0}")]
    Unresolvable(#[source] io::Error),

    #[error("Bookmark paths must be valid UTF-8.")]
    NotUtf8,

    #[error("Bookmark paths can't contain tabs or line breaks.")]
    Unrepresentable,
}

#[derive(Error, Debug)]
pub enum BmError {
    #[error("You haven't initialized the bookmark system yet.\nRun 'bm init' first to initialize the bookmark system!")]
    NotInitialized,

    #[error("HOME environment variable is not set.")]
    HomeNotSet,

    #[error("'{input}' is not a valid path.\n{problem}")]
    InvalidPath {
        input: String,
        #[source]
        problem: PathProblem,
    },

    #[error("'{0}' is not a valid bookmark name. Names can't be blank, start with '-', end in whitespace or contain control characters.")]
    InvalidName(String),

    #[error("The bookmark name '{0}' is too long (max {max} characters). Try again.", max = MAX_NAME_WIDTH)]
    NameTooLong(String),

    #[error("The directory path is too long (max {max} characters). Try again.", max = MAX_PATH_WIDTH)]
    PathTooLong(String),

    #[error("A bookmark named '{name}' already exists --> {existing}\nTry using a different name.")]
    DuplicateName { name: String, existing: String },

    #[error("There isn't a bookmark named '{name}'.\nUse 'bm add {name} {suggested}' to add one.")]
    NotFound { name: String, suggested: String },

    #[error("You don't have any bookmarks yet.\nUse 'bm add <name> <path>' to add one.")]
    Empty,

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to load bookmarks due to insufficient memory: {0}")]
    Allocation(#[from] TryReserveError),
}

impl BmError {
    /// Adapter for `map_err` that attaches the file being accessed.
    pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> BmError + '_ {
        move |source| BmError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BmError>;
