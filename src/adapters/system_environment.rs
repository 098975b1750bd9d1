use std::net::ToSocketAddrs;

use crate::adapters::process::run_captured;
use crate::domain::AppError;
use crate::ports::Environment;

/// Probes the real host: `PATH`, DNS and the installed `node`.
#[derive(Debug, Clone, Default)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnvironment {
    fn command_available(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }

    fn resolve_host(&self, host: &str) -> Result<(), AppError> {
        let offline = |details: String| AppError::Offline { host: host.to_string(), details };
        let mut addrs = host.to_socket_addrs().map_err(|e| offline(e.to_string()))?;
        match addrs.next() {
            Some(_) => Ok(()),
            None => Err(offline("no addresses returned".to_string())),
        }
    }

    fn node_version(&self) -> Result<String, AppError> {
        if !self.command_available("node") {
            return Err(AppError::ToolMissing("node".to_string()));
        }
        let cwd = std::env::current_dir()?;
        run_captured("node", &["--version"], &cwd)
    }
}
