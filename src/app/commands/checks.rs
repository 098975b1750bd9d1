//! Host preconditions: network, Node.js release line, git.

use tracing::info;

use crate::domain::node_release::major_version;
use crate::domain::{AppError, StrapConfig};
use crate::ports::{Environment, NodeReleaseIndex};

pub const CHECKS_FAILED: &str = "Something went wrong while running checks";

/// Run every check in order; the first failure wins.
pub fn run_checks<E, R>(env: &E, releases: &R, config: &StrapConfig) -> Result<(), AppError>
where
    E: Environment,
    R: NodeReleaseIndex,
{
    check_online(env, &config.lookup_host)
        .and_then(|_| check_node_lts(env, releases))
        .and_then(|_| check_git_available(env))
        .map_err(|e| e.in_stage(CHECKS_FAILED))
}

pub fn check_online<E: Environment>(env: &E, host: &str) -> Result<(), AppError> {
    info!("Checking if you are online...");
    env.resolve_host(host)?;
    info!("You are online");
    Ok(())
}

/// The installed Node.js major line must be marked LTS in the release index.
pub fn check_node_lts<E, R>(env: &E, releases: &R) -> Result<(), AppError>
where
    E: Environment,
    R: NodeReleaseIndex,
{
    info!("Checking Node version to be LTS...");
    let current = env.node_version()?;
    let current = current.trim().to_string();
    let major = major_version(&current).ok_or_else(|| AppError::CommandFailed {
        command: "node --version".to_string(),
        details: format!("unrecognized version '{current}'"),
    })?;

    if !releases.lts_majors()?.contains(&major) {
        return Err(AppError::NodeNotLts { current });
    }
    info!("You are running Node {current} which is LTS");
    Ok(())
}

pub fn check_git_available<E: Environment>(env: &E) -> Result<(), AppError> {
    info!("Checking if git is available...");
    if !env.command_available("git") {
        return Err(AppError::ToolMissing("git".to_string()));
    }
    info!("git is available");
    Ok(())
}
