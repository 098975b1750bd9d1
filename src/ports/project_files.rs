//! File operations scoped to a generated project folder.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for file I/O inside one project folder.
///
/// All `path` arguments are relative to the project root.
/// Implementations must reject paths that escape the root boundary.
pub trait ProjectFiles {
    /// The project root.
    fn root(&self) -> &Path;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Overwrite a file with UTF-8 content, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Remove a file. No-op if the file does not exist.
    fn remove_file(&self, path: &str) -> Result<(), AppError>;

    /// Remove a directory and all its contents. No-op if absent.
    fn remove_dir_all(&self, path: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Set the executable bit on a file (Unix-only).
    fn set_executable(&self, path: &str) -> Result<(), AppError>;

    /// Resolve a relative path to an absolute path within the project root.
    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root().join(path)
    }
}
