//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapters::git_command::GitCommandAdapter;
use crate::adapters::npm_command::NpmCommandAdapter;
use crate::adapters::registry_http::HttpRegistryClient;
use crate::adapters::system_environment::SystemEnvironment;
use crate::app::{
    AppContext,
    commands::{checks, init, naming},
};
use crate::domain::config::CONFIG_ENV_VAR;

pub use crate::app::commands::init::{InitOutcome, InstalledDependencies};
pub use crate::domain::{AppError, PackageName, Settings, StrapConfig, Target};

/// Create an `AppContext` backed by the real `git` and `npm` executables.
fn create_context() -> AppContext<GitCommandAdapter, NpmCommandAdapter> {
    AppContext::new(GitCommandAdapter::new(), NpmCommandAdapter::new())
}

/// Load configuration from `path`, else from `$STRAP_CONFIG`, else built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<StrapConfig, AppError> {
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()).map(PathBuf::from),
    };

    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            let content = fs::read_to_string(&path).map_err(|e| {
                AppError::config_error(format!("Failed to read {}: {}", path.display(), e))
            })?;
            StrapConfig::parse(&content)
        }
        None => Ok(StrapConfig::default()),
    }
}

/// Verify network access, an LTS Node.js and git on the host.
pub fn run_checks(config: &StrapConfig) -> Result<(), AppError> {
    let registry =
        HttpRegistryClient::new(config).map_err(|e| e.in_stage(checks::CHECKS_FAILED))?;
    checks::run_checks(&SystemEnvironment::new(), &registry, config)
}

/// Validate `name` and, when `check` is set, confirm it is free on the registry.
///
/// Rejections are returned unwrapped so interactive callers can ask again.
pub fn select_name(
    name: &str,
    check: bool,
    config: &StrapConfig,
) -> Result<PackageName, AppError> {
    let registry = HttpRegistryClient::new(config)?;
    naming::select_name(name, &registry, check)
}

/// Initialize a new package below the current directory.
pub fn init(settings: &Settings, config: &StrapConfig) -> Result<InitOutcome, AppError> {
    init_at(std::env::current_dir()?, settings, config)
}

/// Initialize a new package below the specified directory.
pub fn init_at(
    path: impl Into<PathBuf>,
    settings: &Settings,
    config: &StrapConfig,
) -> Result<InitOutcome, AppError> {
    let ctx = create_context();
    init::execute(&ctx, &path.into(), settings, config)
}

/// Initialize with caller-supplied git and package manager adapters.
pub fn init_with<G, P>(
    git: G,
    packages: P,
    path: &Path,
    settings: &Settings,
    config: &StrapConfig,
) -> Result<InitOutcome, AppError>
where
    G: crate::ports::GitPort,
    P: crate::ports::PackageManager,
{
    init::execute(&AppContext::new(git, packages), path, settings, config)
}
