//! [`TestTree`] fixture for reconciliation scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::{FileTime, set_file_mtime};
use tempfile::TempDir;

/// Base modification time used by [`TestTree`] helpers (2023-11-14).
pub const BASE_MTIME: i64 = 1_700_000_000;

/// A temporary directory holding `hd/`, `pen/` and `dest/` roots plus a
/// `Backup.parm` manifest location.
///
/// # Example
///
/// ```rust,no_run
/// use backup_test_utils::tree::TestTree;
///
/// let tree = TestTree::new();
/// tree.write_manifest(&["dados.txt"]);
/// tree.primary_file("dados.txt", "from hd", 20);
/// tree.secondary_file("dados.txt", "from pen", 10);
/// tree.assert_dest_missing("dados.txt");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create the three empty roots. The manifest is not written.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        for dir in ["hd", "pen", "dest"] {
            fs::create_dir_all(temp_dir.path().join(dir)).unwrap();
        }
        Self { temp_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn manifest(&self) -> PathBuf {
        self.root().join("Backup.parm")
    }

    pub fn primary(&self) -> PathBuf {
        self.root().join("hd")
    }

    pub fn secondary(&self) -> PathBuf {
        self.root().join("pen")
    }

    pub fn destination(&self) -> PathBuf {
        self.root().join("dest")
    }

    /// Write the manifest with one entry per line.
    pub fn write_manifest(&self, entries: &[&str]) {
        let mut content = entries.join("\n");
        content.push('\n');
        self.write_manifest_raw(&content);
    }

    /// Write the manifest verbatim (for blank-line, CRLF and raw-byte cases).
    pub fn write_manifest_raw(&self, content: impl AsRef<[u8]>) {
        fs::write(self.manifest(), content).unwrap();
    }

    /// Create `hd/<name>` with a modification time of `BASE_MTIME + offset` seconds.
    pub fn primary_file(&self, name: impl AsRef<Path>, content: &str, offset: i64) -> PathBuf {
        write_with_mtime(&self.primary().join(name), content, offset)
    }

    /// Create `pen/<name>` with a modification time of `BASE_MTIME + offset` seconds.
    pub fn secondary_file(&self, name: impl AsRef<Path>, content: &str, offset: i64) -> PathBuf {
        write_with_mtime(&self.secondary().join(name), content, offset)
    }

    /// Create `dest/<name>` with the current modification time.
    pub fn dest_file(&self, name: impl AsRef<Path>, content: &str) -> PathBuf {
        let path = self.destination().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read `dest/<name>`, or `None` when it does not exist.
    pub fn read_dest(&self, name: impl AsRef<Path>) -> Option<String> {
        fs::read_to_string(self.destination().join(name)).ok()
    }

    /// # Panics
    /// Panics if `dest/<name>` is missing or differs from `expected`.
    pub fn assert_dest_content(&self, name: impl AsRef<Path>, expected: &str) {
        let name = name.as_ref();
        match self.read_dest(name) {
            Some(actual) => assert_eq!(
                actual,
                expected,
                "Destination file {} has unexpected content",
                name.display()
            ),
            None => panic!("Expected destination file to exist: {}", name.display()),
        }
    }

    /// # Panics
    /// Panics if `dest/<name>` exists.
    pub fn assert_dest_missing(&self, name: impl AsRef<Path>) {
        let full_path = self.destination().join(name);
        assert!(
            !full_path.exists(),
            "Expected destination file NOT to exist: {}",
            full_path.display()
        );
    }
}

fn write_with_mtime(path: &Path, content: &str, offset: i64) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
    set_file_mtime(path, FileTime::from_unix_time(BASE_MTIME + offset, 0)).unwrap();
    path.to_path_buf()
}
