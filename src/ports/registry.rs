//! Remote package and release metadata.

use std::collections::BTreeSet;

use crate::domain::{AppError, PackageName};

/// npm registry lookups.
pub trait PackageRegistry {
    /// Whether a package with this name is already published.
    fn package_exists(&self, name: &PackageName) -> Result<bool, AppError>;
}

/// Node.js release metadata.
pub trait NodeReleaseIndex {
    /// Major versions whose release line is marked LTS.
    fn lts_majors(&self) -> Result<BTreeSet<u64>, AppError>;
}
