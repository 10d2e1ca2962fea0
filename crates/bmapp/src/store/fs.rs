use super::{tsv, DataStore};
use crate::config::BmPaths;
use crate::error::{BmError, Result};
use crate::model::Bookmark;
use std::fs::{self, DirBuilder, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

pub struct FileStore {
    paths: BmPaths,
}

impl FileStore {
    pub fn new(paths: BmPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &BmPaths {
        &self.paths
    }

    /// Create `~/.bm`, owner-only on unix. Failure here is only logged: the
    /// file creation that follows reports the real problem.
    fn ensure_dir(&self) {
        let dir = &self.paths.dir;
        match private_dir_builder().create(dir) {
            Ok(()) => log::debug!("created {}", dir.display()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => log::warn!("Failed to make directory {}: {e}", dir.display()),
        }
    }
}

fn private_dir_builder() -> DirBuilder {
    #[allow(unused_mut)]
    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder
}

/// Write `contents` and flush it to disk. Only the write is fatal; a failed
/// sync is logged and ignored.
fn write_and_close(mut file: File, contents: &str, path: &Path) -> Result<()> {
    file.write_all(contents.as_bytes())
        .map_err(BmError::io(path))?;
    if let Err(e) = file.sync_all() {
        log::warn!("Failed to close {}: {e}", path.display());
    }
    Ok(())
}

impl DataStore for FileStore {
    fn is_initialized(&self) -> bool {
        self.paths.file.is_file()
    }

    fn initialize(&mut self) -> Result<()> {
        self.ensure_dir();

        let path = &self.paths.file;
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(BmError::io(path))?;
        write_and_close(file, &tsv::format(&[]), path)?;

        log::debug!("created {}", path.display());
        Ok(())
    }

    fn load(&self) -> Result<Vec<Bookmark>> {
        let path = &self.paths.file;
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} does not exist, treating as empty", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(BmError::io(path)(e)),
        };

        let bookmarks = tsv::parse(&text)?;
        log::debug!("loaded {} bookmarks from {}", bookmarks.len(), path.display());
        Ok(bookmarks)
    }

    fn save(&mut self, bookmarks: &[Bookmark]) -> Result<()> {
        let path = &self.paths.file;
        let file = File::create(path).map_err(BmError::io(path))?;
        write_and_close(file, &tsv::format(bookmarks), path)?;

        log::debug!("saved {} bookmarks to {}", bookmarks.len(), path.display());
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.paths.file
    }
}
