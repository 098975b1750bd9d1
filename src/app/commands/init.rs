//! Package initialization: prepare the folder, adjust the template, install.

mod adjust;
mod install;
mod prepare;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::adapters::filesystem::FilesystemProject;
use crate::app::AppContext;
use crate::domain::{AppError, Settings, Setup, StrapConfig, Target};
use crate::ports::{GitPort, PackageManager};

pub use adjust::{
    adjust_build_for_target, adjust_for_name, adjust_template, adjust_tsconfig_for_target,
};
pub use install::{InstalledDependencies, install_dependencies};
pub use prepare::prepare_folder;

const INIT_FAILED: &str =
    "Something went wrong while initializing the package in the current directory";

/// What a successful initialization produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub path: PathBuf,
    pub target: Target,
    pub dependencies: InstalledDependencies,
}

/// Execute the init pipeline in `cwd`.
///
/// Stages run strictly in order; the first failure aborts the rest and is
/// returned wrapped in a `Stage` error. Nothing is cleaned up on failure.
pub fn execute<G, P>(
    ctx: &AppContext<G, P>,
    cwd: &Path,
    settings: &Settings,
    config: &StrapConfig,
) -> Result<InitOutcome, AppError>
where
    G: GitPort,
    P: PackageManager,
{
    run_pipeline(ctx, cwd, settings, config).map_err(|e| e.in_stage(INIT_FAILED))
}

fn run_pipeline<G, P>(
    ctx: &AppContext<G, P>,
    cwd: &Path,
    settings: &Settings,
    config: &StrapConfig,
) -> Result<InitOutcome, AppError>
where
    G: GitPort,
    P: PackageManager,
{
    info!("Initializing the package in the current directory...");
    let path = prepare_folder(ctx.git(), cwd, settings.folder_name(), &config.template_url)?;

    let files = FilesystemProject::new(path.clone());
    adjust_template(&files, settings)?;

    let dependencies =
        install_dependencies(&files, ctx.git(), ctx.packages(), &Setup::fixed(), settings.target)?;

    Ok(InitOutcome { path, target: settings.target, dependencies })
}
