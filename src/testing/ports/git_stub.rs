use std::fs;
use std::path::Path;

use url::Url;

use crate::domain::AppError;
use crate::ports::GitPort;

use super::Journal;

/// `GitPort` double. Cloning writes the configured template files to disk.
#[derive(Debug, Default)]
pub struct FakeGit {
    pub journal: Journal,
    template: Vec<(String, String)>,
    fail_clone: bool,
}

impl FakeGit {
    pub fn new(journal: Journal) -> Self {
        Self { journal, ..Self::default() }
    }

    pub fn with_template(mut self, files: &[(&str, &str)]) -> Self {
        self.template =
            files.iter().map(|(path, content)| (path.to_string(), content.to_string())).collect();
        self
    }

    pub fn failing_clone(mut self) -> Self {
        self.fail_clone = true;
        self
    }
}

impl GitPort for FakeGit {
    fn clone_shallow(&self, url: &Url, dest: &Path) -> Result<(), AppError> {
        self.journal.record(format!("git clone {url}"));
        if self.fail_clone {
            return Err(AppError::GitError {
                command: format!("git clone --depth=1 {url} ."),
                details: "repository not found".to_string(),
            });
        }
        for (path, content) in &self.template {
            let target = dest.join(path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(target, content)?;
        }
        Ok(())
    }

    fn init_repository(&self, _dir: &Path) -> Result<(), AppError> {
        self.journal.record("git init");
        Ok(())
    }
}
