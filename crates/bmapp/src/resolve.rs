//! # Path Resolution
//!
//! Every path that reaches the store goes through [`resolve_path`]:
//!
//! 1. A leading `~` is replaced by the home directory (only that character;
//!    `~/src` becomes `$HOME/src`, `~src` becomes `$HOMEsrc`).
//! 2. The result is canonicalized: made absolute, symlinks resolved, and
//!    required to exist.
//!
//! When no home is known the input is left as-is and canonicalization is
//! allowed to fail on its own.

use crate::error::{BmError, PathProblem, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const HOME_SHORTHAND: char = '~';

pub fn expand_tilde(input: &str, home: Option<&Path>) -> PathBuf {
    let Some(rest) = input.strip_prefix(HOME_SHORTHAND) else {
        return PathBuf::from(input);
    };

    match home {
        Some(home) => {
            let mut expanded = home.as_os_str().to_owned();
            expanded.push(rest);
            PathBuf::from(expanded)
        }
        None => {
            log::warn!("HOME environment variable is not set; not expanding '{input}'");
            PathBuf::from(input)
        }
    }
}

/// Expand and canonicalize a user-supplied path into its stored form.
pub fn resolve_path(input: &str, home: Option<&Path>) -> Result<String> {
    let invalid = |problem| BmError::InvalidPath {
        input: input.to_string(),
        problem,
    };

    let expanded = expand_tilde(input, home);
    let canonical = fs::canonicalize(&expanded).map_err(|source| {
        log::debug!("canonicalize {} failed: {source}", expanded.display());
        if input.starts_with(HOME_SHORTHAND) {
            invalid(PathProblem::Tilde)
        } else {
            invalid(PathProblem::Unresolvable(source))
        }
    })?;

    let path = canonical
        .into_os_string()
        .into_string()
        .map_err(|_| invalid(PathProblem::NotUtf8))?;

    if path.contains(['\t', '\n', '\r']) {
        return Err(invalid(PathProblem::Unrepresentable));
    }

    log::debug!("resolved '{input}' to {path}");
    Ok(path)
}
