use std::collections::HashSet;

use crate::domain::AppError;
use crate::ports::Environment;

/// `Environment` double. Defaults to an online host with node and git installed.
#[derive(Debug)]
pub struct FakeEnvironment {
    pub commands: HashSet<String>,
    pub online: bool,
    pub node_version: Option<String>,
}

impl Default for FakeEnvironment {
    fn default() -> Self {
        Self {
            commands: ["node", "npm", "npx", "git"].iter().map(|s| s.to_string()).collect(),
            online: true,
            node_version: Some("v22.11.0".to_string()),
        }
    }
}

impl FakeEnvironment {
    pub fn without_command(mut self, name: &str) -> Self {
        self.commands.remove(name);
        if name == "node" {
            self.node_version = None;
        }
        self
    }
}

impl Environment for FakeEnvironment {
    fn command_available(&self, name: &str) -> bool {
        self.commands.contains(name)
    }

    fn resolve_host(&self, host: &str) -> Result<(), AppError> {
        if self.online {
            Ok(())
        } else {
            Err(AppError::Offline {
                host: host.to_string(),
                details: "failed to lookup address information".to_string(),
            })
        }
    }

    fn node_version(&self) -> Result<String, AppError> {
        self.node_version.clone().ok_or_else(|| AppError::ToolMissing("node".to_string()))
    }
}
