use std::path::Path;

use crate::domain::AppError;
use crate::ports::{DependencyKind, PackageManager};

use super::Journal;

/// `PackageManager` double that records installs in the journal.
#[derive(Debug, Default)]
pub struct FakePackageManager {
    pub journal: Journal,
    fail_on: Option<String>,
}

impl FakePackageManager {
    pub fn new(journal: Journal) -> Self {
        Self { journal, fail_on: None }
    }

    /// Fail any install that includes `package`.
    pub fn failing_on(mut self, package: &str) -> Self {
        self.fail_on = Some(package.to_string());
        self
    }
}

impl PackageManager for FakePackageManager {
    fn install(
        &self,
        _dir: &Path,
        packages: &[String],
        kind: DependencyKind,
    ) -> Result<(), AppError> {
        self.journal.record(format!("npm install {} {}", kind.save_flag(), packages.join(" ")));
        if self.fail_on.as_ref().is_some_and(|package| packages.contains(package)) {
            return Err(AppError::CommandFailed {
                command: "npm install".to_string(),
                details: format!("Failed to install {}, 404 Not Found", packages.join(", ")),
            });
        }
        Ok(())
    }

    fn exec(&self, _dir: &Path, args: &[&str]) -> Result<(), AppError> {
        self.journal.record(format!("npx {}", args.join(" ")));
        Ok(())
    }
}
