//! Filesystem adapter for the `ProjectFiles` port.
//!
//! `FilesystemProject` owns the root of one generated package and rejects
//! paths that would escape it.

mod project_files;

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed project rooted at a package folder.
#[derive(Debug, Clone)]
pub struct FilesystemProject {
    root: PathBuf,
}

impl FilesystemProject {
    /// Create a project rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

// ── Path safety ────────────────────────────────────────────────────────

impl FilesystemProject {
    /// Validates that a path (after logical normalization) is within the root.
    pub(crate) fn validate_path_within_root(&self, path: &Path) -> Result<(), AppError> {
        let full_path = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };

        let normalized_path = normalize_path(&full_path);
        let normalized_root = normalize_path(&self.root);

        if !normalized_path.starts_with(&normalized_root) {
            return Err(AppError::InvalidPath(format!(
                "{} escapes project root {}",
                path.display(),
                self.root.display()
            )));
        }

        Ok(())
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(std::path::Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            std::path::Component::Prefix(..) | std::path::Component::RootDir => {
                ret.push(component.as_os_str());
            }
            std::path::Component::CurDir => {}
            std::path::Component::ParentDir => {
                ret.pop();
            }
            std::path::Component::Normal(c) => {
                ret.push(c);
            }
        }
    }
    ret
}
