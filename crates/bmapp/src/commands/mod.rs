//! # Command Layer
//!
//! The business logic of bm. Each command lives in its own submodule as a
//! `run` function over a [`DataStore`](crate::store::DataStore).
//!
//! ## Shape of a Command
//!
//! Every command follows the same lifecycle:
//!
//! 1. Refuse to run unless the store is initialized.
//! 2. Load the full list.
//! 3. Validate, look up, and apply at most one mutation.
//! 4. Save the full list back, only if something changed.
//!
//! The list is an owned `Vec<Bookmark>` that lives exactly as long as the call.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: results and messages are returned as [`CmdResult`].
//! - **Exit codes**: they return `Result`, the binary decides.
//! - **Read the environment**: the home directory is passed in.
//!
//! ## Testing Strategy
//!
//! Command tests run against `InMemoryStore`, with real temporary directories
//! for anything that has to canonicalize.
//!
//! ## Command Modules
//!
//! - [`init`]: create the store file
//! - [`add`]: add a bookmark
//! - [`list`]: list all bookmarks
//! - [`delete`]: remove a bookmark
//! - [`rename`]: change a bookmark's name
//! - [`edit`]: change a bookmark's path
//! - [`go`]: resolve a bookmark to its path
//! - [`helpers`]: lookup and validation shared by the above

use crate::model::Bookmark;

pub mod add;
pub mod delete;
pub mod edit;
pub mod go;
pub mod helpers;
pub mod init;
pub mod list;
pub mod rename;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Bookmarks to display, in store order.
    pub listed_bookmarks: Vec<Bookmark>,
    /// Path produced by `go`.
    pub resolved_path: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_bookmarks(mut self, bookmarks: Vec<Bookmark>) -> Self {
        self.listed_bookmarks = bookmarks;
        self
    }

    pub fn with_resolved_path(mut self, path: String) -> Self {
        self.resolved_path = Some(path);
        self
    }
}
