use std::path::Path;

use git2::Repository;
use url::Url;

use crate::adapters::process::run_captured;
use crate::domain::AppError;
use crate::ports::GitPort;

/// Git adapter: the `git` CLI for network operations, libgit2 for local ones.
#[derive(Debug, Clone, Default)]
pub struct GitCommandAdapter;

impl GitCommandAdapter {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, args: &[&str], cwd: &Path) -> Result<String, AppError> {
        run_captured("git", args, cwd).map_err(|e| match e {
            AppError::CommandFailed { command, details } => AppError::GitError { command, details },
            other => other,
        })
    }
}

impl GitPort for GitCommandAdapter {
    fn clone_shallow(&self, url: &Url, dest: &Path) -> Result<(), AppError> {
        self.run(&["clone", "--depth=1", url.as_str(), "."], dest)?;
        Ok(())
    }

    fn init_repository(&self, dir: &Path) -> Result<(), AppError> {
        Repository::init(dir).map_err(|e| AppError::GitError {
            command: "git2::Repository::init".to_string(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::process::Command;
    use tempfile::TempDir;

    fn git(args: &[&str], cwd: &Path) {
        let output = Command::new("git").args(args).current_dir(cwd).output().unwrap();
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    fn template_repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        git(&["init", "--initial-branch=main"], dir.path());
        git(&["config", "user.name", "Test User"], dir.path());
        git(&["config", "user.email", "test@example.com"], dir.path());
        fs::write(dir.path().join("package.json"), r#"{"name":"[PACKAGE_NAME_HERE]"}"#).unwrap();
        git(&["add", "."], dir.path());
        git(&["commit", "-m", "template"], dir.path());
        dir
    }

    #[test]
    fn init_repository_creates_git_dir() {
        let dir = TempDir::new().unwrap();
        GitCommandAdapter::new().init_repository(dir.path()).unwrap();
        assert!(dir.path().join(".git").is_dir());
    }

    #[test]
    fn clone_shallow_copies_template_files() {
        let template = template_repo();
        let dest = TempDir::new().unwrap();
        let url = Url::from_directory_path(template.path()).unwrap();

        GitCommandAdapter::new().clone_shallow(&url, dest.path()).unwrap();

        assert!(dest.path().join("package.json").exists());
    }

    #[test]
    fn clone_failure_is_a_git_error() {
        let dest = TempDir::new().unwrap();
        let missing = TempDir::new().unwrap().path().join("missing");
        let url = Url::from_directory_path(&missing).unwrap();

        let err = GitCommandAdapter::new().clone_shallow(&url, dest.path()).unwrap_err();

        assert!(matches!(err, AppError::GitError { .. }));
    }
}
