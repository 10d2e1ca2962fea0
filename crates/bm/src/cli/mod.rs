//! # CLI Behavior
//!
//! This is the only place that knows about terminal I/O, exit codes and
//! output formatting. For the overall architecture, see [`crate`].
//!
//! ## Exit Codes and Streams
//!
//! - Success exits 0. Any failure exits 1.
//! - Errors, usage lines and logs go to stderr.
//! - `bm go` writes nothing but the path (and a newline) to stdout.
//! - A wrong number of arguments prints the command's usage line and never
//!   touches the store.
//!
//! ## Module Structure
//!
//! - `commands`: parse, set up logging and context, dispatch to handlers
//! - `render`: the bookmark table and command messages
//! - `setup`: clap definitions, help text, usage lines
//! - `styles`: terminal styles

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
