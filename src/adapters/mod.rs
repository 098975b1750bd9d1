pub mod filesystem;
pub mod git_command;
pub mod npm_command;
pub(crate) mod process;
pub mod registry_http;
pub mod system_environment;
