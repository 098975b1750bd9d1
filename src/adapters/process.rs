//! Blocking subprocess helpers shared by the command adapters.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::AppError;

fn display(program: &str, args: &[&str]) -> String {
    std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ")
}

/// Run a command and capture its stdout (trimmed).
pub(crate) fn run_captured(program: &str, args: &[&str], cwd: &Path) -> Result<String, AppError> {
    let command_line = display(program, args);
    debug!(command = %command_line, cwd = %cwd.display(), "running");

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|e| AppError::CommandFailed {
            command: command_line.clone(),
            details: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(AppError::CommandFailed {
            command: command_line,
            details: if stderr.is_empty() {
                format!("exit status {}", output.status)
            } else {
                stderr
            },
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run a command with the terminal attached, so progress output reaches the user.
pub(crate) fn run_inherited(program: &str, args: &[&str], cwd: &Path) -> Result<(), AppError> {
    let command_line = display(program, args);
    debug!(command = %command_line, cwd = %cwd.display(), "running");

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| AppError::CommandFailed {
            command: command_line.clone(),
            details: e.to_string(),
        })?;

    if !status.success() {
        let code = status.code().map_or_else(|| "signal".to_string(), |c| c.to_string());
        return Err(AppError::CommandFailed {
            command: command_line,
            details: format!("exit code: {code}"),
        });
    }
    Ok(())
}
