//! # bm CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and turns the outcome into an exit code.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/bm/src/cli/)                             │
//! │  - clap argument parsing + help/usage text (setup.rs)       │
//! │  - Logging setup, context wiring, dispatch (commands.rs)    │
//! │  - Table and message rendering (render.rs, styles.rs)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/bmapp/src/api.rs)                        │
//! │  - One method per command, returns `CmdResult`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/bmapp/src/commands/*)                │
//! │  - Business logic over a `DataStore`                        │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Shell Integration
//!
//! A process cannot change its parent shell's directory, so `bm go` only
//! prints the path. Wrap it in a shell function to actually jump:
//!
//! ```sh
//! bmgo() { cd "$(bm go "$1")"; }
//! ```
//!
//! ## Testing Approach
//!
//! - **bmapp**: command logic against `InMemoryStore`, the file store against
//!   temp directories.
//! - **CLI (`src/cli/`)**: parsing and rendering unit tests.
//! - **`tests/`**: end-to-end runs of the real binary with `HOME` pointed at a
//!   temp directory.

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
