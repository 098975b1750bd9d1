//! Package name selection against npm naming rules and the registry.

use tracing::{info, warn};

use crate::domain::{AppError, PackageName, validate_package_name};
use crate::ports::PackageRegistry;

pub const NAMING_FAILED: &str = "Something went wrong while defining the package name";

/// Accept `name` as the package name.
///
/// With `check`, the name must be valid for new packages and not yet published.
/// Without it only hard npm errors are rejected, since the name must still map
/// to a folder.
pub fn select_name<R: PackageRegistry>(
    name: &str,
    registry: &R,
    check: bool,
) -> Result<PackageName, AppError> {
    if !check {
        warn!("Skipping package name availability check and package name validation...");
        return PackageName::new(name);
    }

    info!("Checking if the package name is valid...");
    let validation = validate_package_name(name);
    if !validation.valid_for_new_packages() {
        return Err(AppError::InvalidPackageName {
            name: name.to_string(),
            reasons: validation.reasons(),
        });
    }
    let package = PackageName::new(name)?;
    info!("Selected package name is valid");

    info!("Checking if the package name is available...");
    if registry.package_exists(&package)? {
        return Err(AppError::PackageNameTaken(package.to_string()));
    }
    info!("Selected package name is available");
    Ok(package)
}

/// Whether a name rejection should send the user back to the name prompt.
pub fn is_retryable(err: &AppError) -> bool {
    matches!(err, AppError::InvalidPackageName { .. } | AppError::PackageNameTaken(_))
}
