mod environment;
mod git;
mod package_manager;
mod project_files;
mod registry;

pub use environment::Environment;
pub use git::GitPort;
pub use package_manager::{DependencyKind, PackageManager};
pub use project_files::ProjectFiles;
pub use registry::{NodeReleaseIndex, PackageRegistry};
