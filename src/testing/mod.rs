pub mod ports;

#[allow(unused_imports)]
pub use ports::{
    FakeEnvironment, FakeGit, FakePackageManager, FakeRegistry, Journal, MemoryProject,
};
