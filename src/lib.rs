//! strap: create an npm package boilerplate from a fixed TypeScript template.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    InitOutcome, InstalledDependencies, init, init_at, init_with, load_config, run_checks,
    select_name,
};
pub use domain::{AppError, PackageName, Settings, StrapConfig, Target};
