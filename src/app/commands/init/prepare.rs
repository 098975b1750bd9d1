//! Package folder preparation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use url::Url;

use crate::adapters::filesystem::FilesystemProject;
use crate::domain::AppError;
use crate::domain::template::TEMPLATE_GIT_DIR;
use crate::ports::{GitPort, ProjectFiles};

/// Create `<cwd>/<folder_name>`, clone the template into it and drop the
/// template's git history.
///
/// Refuses to touch a folder that already exists.
pub fn prepare_folder<G: GitPort>(
    git: &G,
    cwd: &Path,
    folder_name: &str,
    template_url: &Url,
) -> Result<PathBuf, AppError> {
    let dir = cwd.join(folder_name);
    if dir.exists() {
        return Err(AppError::FolderExists(dir.display().to_string()));
    }

    info!("Creating folder {}...", dir.display());
    fs::create_dir_all(&dir)?;

    info!("Copying the package template...");
    git.clone_shallow(template_url, &dir)?;

    FilesystemProject::new(dir.clone()).remove_dir_all(TEMPLATE_GIT_DIR)?;
    Ok(dir)
}
