mod environment_stub;
mod git_stub;
mod journal;
mod memory_project;
mod package_manager_stub;
mod registry_stub;

pub use self::environment_stub::FakeEnvironment;
pub use self::git_stub::FakeGit;
pub use self::journal::Journal;
pub use self::memory_project::MemoryProject;
pub use self::package_manager_stub::FakePackageManager;
pub use self::registry_stub::FakeRegistry;
