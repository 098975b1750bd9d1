//! Host environment probes used by the precondition checks.

use crate::domain::AppError;

pub trait Environment {
    /// Whether an executable named `name` is on `PATH`.
    fn command_available(&self, name: &str) -> bool;

    /// Resolve `host` (`host:port`) through DNS.
    fn resolve_host(&self, host: &str) -> Result<(), AppError>;

    /// Installed Node.js version as printed by `node --version` (e.g. `v22.11.0`).
    fn node_version(&self) -> Result<String, AppError>;
}
