use std::path::Path;

use crate::adapters::process::run_inherited;
use crate::domain::AppError;
use crate::ports::{DependencyKind, PackageManager};

/// npm adapter. Output is streamed to the terminal.
#[derive(Debug, Clone)]
pub struct NpmCommandAdapter {
    npm: String,
    npx: String,
}

impl Default for NpmCommandAdapter {
    fn default() -> Self {
        Self::with_programs("npm", "npx")
    }
}

impl NpmCommandAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use alternative executables for `npm` and `npx`.
    pub fn with_programs(npm: &str, npx: &str) -> Self {
        Self { npm: npm.to_string(), npx: npx.to_string() }
    }
}

/// Arguments for `npm install`.
pub(crate) fn install_args(packages: &[String], kind: DependencyKind) -> Vec<&str> {
    let mut args = vec!["install"];
    args.extend(packages.iter().map(String::as_str));
    args.push("--progress");
    args.push(kind.save_flag());
    args
}

impl PackageManager for NpmCommandAdapter {
    fn install(
        &self,
        dir: &Path,
        packages: &[String],
        kind: DependencyKind,
    ) -> Result<(), AppError> {
        run_inherited(&self.npm, &install_args(packages, kind), dir).map_err(|e| match e {
            AppError::CommandFailed { details, .. } => AppError::CommandFailed {
                command: format!("{} install", self.npm),
                details: format!("Failed to install {}, {details}", packages.join(", ")),
            },
            other => other,
        })
    }

    fn exec(&self, dir: &Path, args: &[&str]) -> Result<(), AppError> {
        run_inherited(&self.npx, args, dir)
    }
}
