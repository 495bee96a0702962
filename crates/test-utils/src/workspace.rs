//! Temporary project directories for filesystem tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
///
/// ```
/// use graphql_test_utils::TestWorkspace;
///
/// let workspace = TestWorkspace::new();
/// workspace.write("graphql/schema.graphql", "type Query { hello: String }");
/// assert!(workspace.exists("graphql/schema.graphql"));
/// ```
pub struct TestWorkspace {
    dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write a file, creating parent directories as needed.
    pub fn write(&self, relative: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, contents).expect("failed to write file");
        path
    }

    pub fn read(&self, relative: impl AsRef<Path>) -> String {
        let path = self.join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
    }

    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        self.join(relative).exists()
    }
}
