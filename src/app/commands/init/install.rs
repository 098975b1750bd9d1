//! Dependency installation and git hook setup.

use tracing::info;

use crate::domain::setup::NODE_TYPES_PACKAGE;
use crate::domain::template::{PRE_COMMIT_HOOK, PRE_COMMIT_SCRIPT};
use crate::domain::{AppError, Setup, Target, assemble_dependencies, exclude_bundler_for_target};
use crate::ports::{DependencyKind, GitPort, PackageManager, ProjectFiles};

/// Packages installed for one project, per manifest section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledDependencies {
    pub dev: Vec<String>,
    pub prod: Vec<String>,
}

/// Install the fixed toolchain for `target`, then set up git and the pre-commit hook.
pub fn install_dependencies<F, G, P>(
    files: &F,
    git: &G,
    packages: &P,
    setup: &Setup,
    target: Target,
) -> Result<InstalledDependencies, AppError>
where
    F: ProjectFiles,
    G: GitPort,
    P: PackageManager,
{
    let dir = files.root();
    let mut installed = InstalledDependencies {
        dev: exclude_bundler_for_target(assemble_dependencies(setup, true), target),
        prod: assemble_dependencies(setup, false),
    };

    install_group(packages, dir, &installed.dev, DependencyKind::Dev)?;
    install_group(packages, dir, &installed.prod, DependencyKind::Prod)?;

    if target == Target::Node {
        let types = vec![NODE_TYPES_PACKAGE.to_string()];
        install_group(packages, dir, &types, DependencyKind::Dev)?;
        installed.dev.extend(types);
    }

    info!("Initializing git repository...");
    git.init_repository(dir)?;

    info!("Setting up husky...");
    packages.exec(dir, &["husky", "init"])?;
    files.write_file(PRE_COMMIT_HOOK, PRE_COMMIT_SCRIPT)?;
    files.set_executable(PRE_COMMIT_HOOK)?;

    Ok(installed)
}

fn install_group<P: PackageManager>(
    packages: &P,
    dir: &std::path::Path,
    group: &[String],
    kind: DependencyKind,
) -> Result<(), AppError> {
    if group.is_empty() {
        return Ok(());
    }
    info!("Installing {kind} dependencies: {}", group.join(", "));
    packages.install(dir, group, kind)
}
