pub mod config;
pub mod error;
pub mod node_release;
pub mod package_name;
pub mod rewrite;
pub mod settings;
pub mod setup;
pub mod summary;
pub mod target;
pub mod template;

pub use config::StrapConfig;
pub use error::AppError;
pub use package_name::{NameValidation, PackageName, validate_package_name};
pub use rewrite::{Pattern, RewriteReport, Scope};
pub use settings::Settings;
pub use setup::{Role, Setup, ToolInfo, assemble_dependencies, exclude_bundler_for_target};
pub use summary::SettingsSummary;
pub use target::Target;
