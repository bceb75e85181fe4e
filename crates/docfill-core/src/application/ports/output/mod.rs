//! Driven (output) ports - implemented by infrastructure.

use std::path::{Path, PathBuf};

use crate::error::DocfillResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `docfill_adapters::filesystem::LocalFilesystem` (production)
/// - `docfill_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Adapters report failures as `ApplicationError::FileRead`, `FileWrite` or
/// `FilesystemError` so the service can tell them apart per file.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> DocfillResult<String>;

    /// Replace a file's content.
    fn write_file(&self, path: &Path, content: &str) -> DocfillResult<()>;

    /// Every regular file below `root`, recursively. Order is unspecified.
    fn list_files(&self, root: &Path) -> DocfillResult<Vec<PathBuf>>;
}
