//! Package manager port definition.

use std::fmt;
use std::path::Path;

use crate::domain::AppError;

/// Which manifest section an install is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Dev,
    Prod,
}

impl DependencyKind {
    /// npm flag selecting the manifest section.
    pub fn save_flag(&self) -> &'static str {
        match self {
            DependencyKind::Dev => "--save-dev",
            DependencyKind::Prod => "--save",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyKind::Dev => f.write_str("development"),
            DependencyKind::Prod => f.write_str("production"),
        }
    }
}

pub trait PackageManager {
    /// Install `packages` into the project at `dir`.
    fn install(
        &self,
        dir: &Path,
        packages: &[String],
        kind: DependencyKind,
    ) -> Result<(), AppError>;

    /// Run a package binary (`npx <args>`) inside `dir`.
    fn exec(&self, dir: &Path, args: &[&str]) -> Result<(), AppError>;
}

impl<T: PackageManager + ?Sized> PackageManager for &T {
    fn install(
        &self,
        dir: &Path,
        packages: &[String],
        kind: DependencyKind,
    ) -> Result<(), AppError> {
        (**self).install(dir, packages, kind)
    }

    fn exec(&self, dir: &Path, args: &[&str]) -> Result<(), AppError> {
        (**self).exec(dir, args)
    }
}
