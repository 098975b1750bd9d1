use crate::ports::{GitPort, PackageManager};

/// Application context holding the external tools the init pipeline drives.
pub struct AppContext<G: GitPort, P: PackageManager> {
    git: G,
    packages: P,
}

impl<G: GitPort, P: PackageManager> AppContext<G, P> {
    /// Create a new application context.
    pub fn new(git: G, packages: P) -> Self {
        Self { git, packages }
    }

    /// Get a reference to the git adapter.
    pub fn git(&self) -> &G {
        &self.git
    }

    /// Get a reference to the package manager.
    pub fn packages(&self) -> &P {
        &self.packages
    }
}
