//! Template adjustment: name and target specific edits.

use serde_json::{Map, Value};
use tracing::info;

use crate::app::services::FileRewriter;
use crate::domain::template::{
    MANIFEST_FILE, NAME_PLACEHOLDER, NODE_BUILD_SCRIPT_LINE, NODE_MODULE_LINE,
    NODE_MODULE_RESOLUTION_LINE, README_FILE, TSCONFIG_FILE, VITE_CONFIG_FILE,
    WEB_BUILD_SCRIPT_LINE, WEB_MODULE_LINE, WEB_MODULE_RESOLUTION_LINE,
};
use crate::domain::{AppError, PackageName, Pattern, Scope, Settings, Target};
use crate::ports::ProjectFiles;

/// Write the package name into the manifest and the README title.
pub fn adjust_for_name<F: ProjectFiles>(files: &F, name: &PackageName) -> Result<(), AppError> {
    info!("Adjusting package template to use the package name...");

    let mut patch = Map::new();
    patch.insert("name".to_string(), Value::String(name.to_string()));
    FileRewriter::rewrite_json(files, MANIFEST_FILE, &patch)?;

    FileRewriter::rewrite_text(
        files,
        README_FILE,
        &[Pattern::literal(NAME_PLACEHOLDER, Scope::First)?],
        &[name.as_str()],
    )?;
    Ok(())
}

/// Web: swap the build script for the Vite build. Node: drop the Vite config.
pub fn adjust_build_for_target<F: ProjectFiles>(files: &F, target: Target) -> Result<(), AppError> {
    match target {
        Target::Web => {
            info!("Modifying build script in {MANIFEST_FILE}...");
            FileRewriter::rewrite_text(
                files,
                MANIFEST_FILE,
                &[Pattern::literal(NODE_BUILD_SCRIPT_LINE, Scope::All)?],
                &[WEB_BUILD_SCRIPT_LINE],
            )?;
        }
        Target::Node => {
            info!("Removing {VITE_CONFIG_FILE}...");
            files.remove_file(VITE_CONFIG_FILE)?;
        }
    }
    Ok(())
}

/// Web: switch module resolution to the bundler profile. Node: leave as is.
pub fn adjust_tsconfig_for_target<F: ProjectFiles>(
    files: &F,
    target: Target,
) -> Result<(), AppError> {
    if target == Target::Web {
        info!("Modifying module settings in {TSCONFIG_FILE}...");
        FileRewriter::rewrite_text(
            files,
            TSCONFIG_FILE,
            &[
                Pattern::literal(NODE_MODULE_RESOLUTION_LINE, Scope::All)?,
                Pattern::literal(NODE_MODULE_LINE, Scope::All)?,
            ],
            &[WEB_MODULE_RESOLUTION_LINE, WEB_MODULE_LINE],
        )?;
    }
    Ok(())
}

/// All template edits for `settings`, in order.
pub fn adjust_template<F: ProjectFiles>(files: &F, settings: &Settings) -> Result<(), AppError> {
    info!("Adjusting package template...");
    adjust_for_name(files, &settings.name)?;
    adjust_build_for_target(files, settings.target)?;
    adjust_tsconfig_for_target(files, settings.target)?;
    Ok(())
}
