//! The interactive strap flow: checks, name, settings, init.

use std::path::PathBuf;

use tracing::warn;

use super::{output, prompts};
use crate::app::api;
use crate::app::commands::naming::{NAMING_FAILED, is_retryable};
use crate::domain::{AppError, PackageName, Settings, SettingsSummary, Setup, StrapConfig, Target};

const SETTINGS_FAILED: &str = "Something went wrong while defining the package settings";

pub struct InitArgs {
    pub name: Option<String>,
    pub target: Option<Target>,
    pub yes: bool,
    pub skip_name_check: bool,
    pub skip_env_checks: bool,
    pub config: Option<PathBuf>,
}

pub fn run_init(args: InitArgs) -> Result<(), AppError> {
    let config = api::load_config(args.config.as_deref())?;

    output::header("Create an npm package boilerplate with strap");

    if args.skip_env_checks {
        warn!("Skipping environment checks");
    } else {
        api::run_checks(&config)?;
    }

    let name = define_name(&args, &config).map_err(|e| e.in_stage(NAMING_FAILED))?;
    let settings = define_settings(name, &args).map_err(|e| match e {
        AppError::Declined(_) => e,
        other => other.in_stage(SETTINGS_FAILED),
    })?;

    output::sub_header("Initializing the package in the current directory...");
    let outcome = api::init(&settings, &config)?;

    output::success("Successfully initialized the package in the current directory");
    output::info(&format!("Package folder: {}", outcome.path.display()));
    if !outcome.dependencies.dev.is_empty() {
        output::info(&format!("Dev dependencies: {}", outcome.dependencies.dev.join(", ")));
    }
    if !outcome.dependencies.prod.is_empty() {
        output::info(&format!("Dependencies: {}", outcome.dependencies.prod.join(", ")));
    }
    output::header("The TODO.md file was included");
    output::info("Go over it to finalize the setup");
    Ok(())
}

fn define_name(args: &InitArgs, config: &StrapConfig) -> Result<PackageName, AppError> {
    if let Some(name) = &args.name {
        return api::select_name(name, !args.skip_name_check, config);
    }

    output::sub_header("Before naming the package:");
    output::warning(
        "If you want to make a scoped package, then prefix its name with the needed scope",
    );
    output::warning(
        "like @scope/package-name where the @scope part could be your npm username or company name",
    );
    output::warning(
        "NOTICE! unscoped packages are always public, so for private packages you must add some scope",
    );

    let check = if args.skip_name_check {
        false
    } else if args.yes {
        true
    } else {
        prompts::confirm(
            "Do you want to check if the package name is available on npm and is valid?",
            true,
        )?
    };
    if !check {
        output::warning(
            "Be aware that the package name might not be valid or could already be taken",
        );
    }

    loop {
        let candidate = prompts::package_name()?;
        match api::select_name(&candidate, check, config) {
            Ok(name) => return Ok(name),
            Err(e) if is_retryable(&e) => {
                output::error(&e.to_string());
                if let AppError::PackageNameTaken(taken) = &e {
                    output::info(&format!("See https://www.npmjs.com/package/{taken}"));
                }
                output::info("Try another name...");
            }
            Err(e) => return Err(e),
        }
    }
}

fn define_settings(name: PackageName, args: &InitArgs) -> Result<Settings, AppError> {
    let setup = Setup::fixed();

    output::sub_header("Choosing settings:");
    output::warning("The following settings are not customizable:");
    output::info(&SettingsSummary::Fixed(&setup).render());
    output::warning("The project will always have these tools set up with npm");
    output::warning(
        "and the current working directory as a starting point to generate the boilerplate",
    );
    output::warning("Vite will be used as a bundler only if the targeted platform is web");

    let approved = args.yes || prompts::confirm("Do you agree to use this setup?", true)?;
    if !approved {
        output::info("There are many tools to start an npm package project with a different setup");
        output::info("See for example: https://www.npmjs.com/search?q=npm%20package%20boilerplate");
        return Err(AppError::Declined("The fixed setup was not approved".to_string()));
    }
    output::success("Default setup is approved");

    let mut settings = Settings::new(name, args.target.unwrap_or_default());
    output::info("Customizable settings (with defaults):");
    output::info(&SettingsSummary::Customizable(&settings).render());

    if args.target.is_none() && !args.yes {
        let use_defaults =
            prompts::confirm("Do you want to use default values for customizable settings?", true)?;
        if !use_defaults {
            output::sub_header("Choose customizable settings:");
            output::info("Selecting a specific platform allows for using its APIs:");
            output::info("crypto, fs, path, os, etc. in Node or the window object in the browser");
            output::info(
                "If the package is meant for both, choose 'web' to skip Node types and add Vite",
            );
            output::warning("In that case only APIs available in both environments should be used");
            settings.target = prompts::target()?;
        }
    }

    output::success("DONE! Selected settings:");
    output::info(&SettingsSummary::Customizable(&settings).render());
    Ok(settings)
}
