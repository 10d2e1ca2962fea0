//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single entry
//! point for every bm operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Supplies context** the commands need but should not look up themselves
//!   (the home directory used for `~` expansion)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or formatting
//!
//! ## Generic Over DataStore
//!
//! `BmApi<S: DataStore>` is generic over the storage backend:
//! - Production: `BmApi<FileStore>`
//! - Testing: `BmApi<InMemoryStore>`
//!
//! API tests check that each method reaches its command with the right
//! arguments. Command logic is tested in the command modules.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct BmApi<S: DataStore> {
    store: S,
    home: Option<PathBuf>,
}

impl<S: DataStore> BmApi<S> {
    /// `home` is used for `~` expansion; `None` leaves tildes unexpanded.
    pub fn new(store: S, home: Option<PathBuf>) -> Self {
        Self { store, home }
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn add(&mut self, name: &str, path: &str) -> Result<CmdResult> {
        let home = self.home.as_deref();
        commands::add::run(&mut self.store, home, name, path)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn delete(&mut self, name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, name)
    }

    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<CmdResult> {
        commands::rename::run(&mut self.store, old_name, new_name)
    }

    pub fn edit(&mut self, name: &str, new_path: &str) -> Result<CmdResult> {
        let home = self.home.as_deref();
        commands::edit::run(&mut self.store, home, name, new_path)
    }

    pub fn go(&self, name: &str) -> Result<CmdResult> {
        commands::go::run(&self.store, name)
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
