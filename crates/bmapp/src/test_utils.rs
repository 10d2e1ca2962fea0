use crate::config::BmPaths;
use crate::store::fs::FileStore;
use crate::store::DataStore;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Longest single path component we create; stays under common NAME_MAX.
const MAX_SEGMENT: usize = 200;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub store: FileStore,
    /// Canonical temp home; `$HOME` for everything in this env.
    pub home: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let home = fs::canonicalize(temp_dir.path()).expect("failed to canonicalize temp dir");
        let store = FileStore::new(BmPaths::from_home(&home));
        Self {
            _temp_dir: temp_dir,
            store,
            home,
        }
    }

    pub fn initialized() -> Self {
        let mut env = Self::new();
        env.store.initialize().expect("failed to initialize store");
        env
    }

    /// Create `home/<rel>` and return its canonical path as stored by bm.
    pub fn dir(&self, rel: &str) -> String {
        let path = self.home.join(rel);
        fs::create_dir_all(&path).expect("failed to create dir");
        path.to_str().expect("temp paths are UTF-8").to_string()
    }

    /// Create a directory under home whose canonical path is exactly `len` bytes.
    pub fn dir_with_len(&self, len: usize) -> String {
        let mut path = self.home.join("long");
        let mut current = path.as_os_str().len();
        assert!(len >= current + 2, "requested length {len} too short");

        while current < len {
            // Each segment costs its length plus one separator.
            let remaining = len - current - 1;
            let mut segment = remaining.min(MAX_SEGMENT);
            if remaining - segment == 1 {
                // Leave room for at least "/x" in the next round.
                segment -= 1;
            }
            path.push("d".repeat(segment));
            current += segment + 1;
        }

        fs::create_dir_all(&path).expect("failed to create long dir");
        let path = path.to_str().expect("temp paths are UTF-8").to_string();
        assert_eq!(path.len(), len);
        path
    }
}
