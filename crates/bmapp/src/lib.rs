//! # bmapp
//!
//! The library behind `bm`, a personal directory-bookmark manager: short names
//! mapped to absolute directory paths, kept in a plain tab-separated file in
//! the user's home directory.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  bm (CLI)    │  argument parsing, rendering, exit codes
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │  api         │  BmApi<S>: one method per command
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │  commands    │  load → validate → mutate → save
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │  store       │  DataStore trait; FileStore, InMemoryStore, tsv codec
//! └──────────────┘
//! ```
//!
//! Supporting modules:
//!
//! - [`config`]: where the store lives, derived from `HOME`
//! - [`resolve`]: `~` expansion and canonicalization of user paths
//! - [`model`]: the [`model::Bookmark`] record and its width rules
//! - [`error`]: [`error::BmError`], every failure a command can report
//! - [`init`]: builds the production [`api::BmApi`] from the environment
//!
//! ## Invariants
//!
//! - Names are unique case-insensitively. Lookup is case-insensitive too.
//! - Stored paths are canonical, absolute and existed when stored.
//! - Bookmarks keep insertion order. Rename and edit do not move them.
//! - A failed command leaves the file unchanged.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod resolve;
pub mod store;

#[cfg(test)]
pub mod test_utils;
