//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use docfill_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{DocfillError, DocfillResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// service. Files can be marked unreadable or read-only to exercise per-file
/// failure paths.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
    writes: Vec<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                let mut current = PathBuf::new();
                for component in parent.components() {
                    current.push(component);
                    inner.directories.insert(current.clone());
                }
            }
            inner.files.insert(path, content.into());
        }
        self
    }

    /// Seed an empty directory.
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            let mut current = PathBuf::new();
            for component in path.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        self
    }

    /// Make reads of `path` fail.
    pub fn with_unreadable(self, path: impl Into<PathBuf>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.unreadable.insert(path.into());
        }
        self
    }

    /// Make writes to `path` fail.
    pub fn with_read_only(self, path: impl Into<PathBuf>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Every successful write, in order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.writes.clone())
            .unwrap_or_default()
    }

    fn lock_error() -> DocfillError {
        DocfillError::Internal {
            message: "memory filesystem lock poisoned".into(),
        }
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> DocfillResult<String> {
        let inner = self.inner.read().map_err(|_| Self::lock_error())?;

        if inner.unreadable.contains(path) {
            return Err(ApplicationError::FileRead {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }

        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FileRead {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> DocfillResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error())?;

        if inner.read_only.contains(path) {
            return Err(ApplicationError::FileWrite {
                path: path.to_path_buf(),
                reason: "read-only file".into(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FileWrite {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes.push(path.to_path_buf());
        Ok(())
    }

    fn list_files(&self, root: &Path) -> DocfillResult<Vec<PathBuf>> {
        let inner = self.inner.read().map_err(|_| Self::lock_error())?;
        Ok(inner
            .files
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_file_creates_parents() {
        let fs = MemoryFilesystem::new().with_file("docs/guide/intro.md", "hi");
        assert!(fs.is_dir(Path::new("docs")));
        assert!(fs.is_dir(Path::new("docs/guide")));
        assert!(fs.exists(Path::new("docs/guide/intro.md")));
    }

    #[test]
    fn list_files_is_scoped_to_root() {
        let fs = MemoryFilesystem::new()
            .with_file("docs/a.md", "")
            .with_file("other/b.md", "");
        let files = fs.list_files(Path::new("docs")).unwrap();
        assert_eq!(files, vec![PathBuf::from("docs/a.md")]);
    }

    #[test]
    fn read_only_rejects_writes() {
        let fs = MemoryFilesystem::new()
            .with_file("a.md", "x")
            .with_read_only("a.md");
        assert!(fs.write_file(Path::new("a.md"), "y").is_err());
        assert_eq!(fs.read_file(Path::new("a.md")).as_deref(), Some("x"));
        assert!(fs.writes().is_empty());
    }

    #[test]
    fn unreadable_rejects_reads() {
        let fs = MemoryFilesystem::new()
            .with_file("a.md", "x")
            .with_unreadable("a.md");
        assert!(fs.read_to_string(Path::new("a.md")).is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new().with_dir("d");
        let handle = fs.clone();
        fs.write_file(Path::new("d/new.md"), "body").unwrap();
        assert_eq!(handle.read_file(Path::new("d/new.md")).as_deref(), Some("body"));
        assert_eq!(handle.writes(), vec![PathBuf::from("d/new.md")]);
    }
}
