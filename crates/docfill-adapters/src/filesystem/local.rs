//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use docfill_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{DocfillError, DocfillResult},
};
use tracing::{trace, warn};
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem {
    follow_links: bool,
}

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self {
            follow_links: false,
        }
    }

    /// Follow symbolic links while walking the scan root.
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> DocfillResult<String> {
        std::fs::read_to_string(path).map_err(|e| read_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> DocfillResult<()> {
        std::fs::write(path, content).map_err(|e| write_error(path, e))
    }

    fn list_files(&self, root: &Path) -> DocfillResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for walk_entry in WalkDir::new(root).follow_links(self.follow_links) {
            let entry = match walk_entry {
                Ok(entry) => entry,
                // The root itself is unreadable: nothing below it can be scanned.
                Err(e) if e.depth() == 0 => {
                    return Err(ApplicationError::FilesystemError {
                        path: root.to_path_buf(),
                        reason: e.to_string(),
                    }
                    .into());
                }
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                    warn!(path = %path.display(), error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if entry.file_type().is_file() {
                trace!(path = %entry.path().display(), "File found");
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

fn read_error(path: &Path, e: io::Error) -> DocfillError {
    ApplicationError::FileRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

fn write_error(path: &Path, e: io::Error) -> DocfillError {
    ApplicationError::FileWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
