//! In-memory `ProjectFiles` double.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ProjectFiles;

/// Project folder backed by a map of relative path to content.
#[derive(Debug)]
pub struct MemoryProject {
    root: PathBuf,
    files: Mutex<BTreeMap<String, String>>,
    executables: Mutex<BTreeSet<String>>,
    writes: Mutex<usize>,
}

impl Default for MemoryProject {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/memory/project"),
            files: Mutex::new(BTreeMap::new()),
            executables: Mutex::new(BTreeSet::new()),
            writes: Mutex::new(0),
        }
    }
}

impl MemoryProject {
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let project = Self::default();
        {
            let mut map = project.files.lock().unwrap();
            for (path, content) in files {
                map.insert(path.to_string(), content.to_string());
            }
        }
        project
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// Number of `write_file` calls so far.
    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    pub fn is_executable(&self, path: &str) -> bool {
        self.executables.lock().unwrap().contains(path)
    }
}

impl ProjectFiles for MemoryProject {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.content(path).ok_or_else(|| {
            AppError::from(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Mock file not found: {path}"),
            ))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }

    fn remove_file(&self, path: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().remove(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &str) -> Result<(), AppError> {
        let prefix = if path.ends_with('/') { path.to_string() } else { format!("{}/", path) };
        self.files.lock().unwrap().retain(|key, _| !key.starts_with(&prefix));
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        let prefix = format!("{}/", path.trim_end_matches('/'));
        self.files.lock().unwrap().keys().any(|key| key == path || key.starts_with(&prefix))
    }

    fn set_executable(&self, path: &str) -> Result<(), AppError> {
        if !self.files.lock().unwrap().contains_key(path) {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Mock file not found: {path}"),
            )));
        }
        self.executables.lock().unwrap().insert(path.to_string());
        Ok(())
    }
}
