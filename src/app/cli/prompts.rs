//! Interactive questions.
//!
//! An interrupted prompt (Ctrl-C, closed stdin) is treated as the user
//! backing out and surfaces as `AppError::Declined`.

use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::domain::{AppError, PackageName, Target};

pub fn confirm(message: &str, default: bool) -> Result<bool, AppError> {
    Confirm::new().with_prompt(message).default(default).interact().map_err(prompt_error)
}

pub fn package_name() -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt("What is the desired name of the package?")
        .default(PackageName::DEFAULT.to_string())
        .interact_text()
        .map_err(prompt_error)
}

pub fn target() -> Result<Target, AppError> {
    let items: Vec<&str> = Target::ALL.iter().map(Target::as_str).collect();
    let default = Target::ALL.iter().position(|t| *t == Target::default()).unwrap_or(0);
    let index = Select::new()
        .with_prompt("Choose the target for the package")
        .items(&items)
        .default(default)
        .interact()
        .map_err(prompt_error)?;
    Ok(Target::ALL[index])
}

fn prompt_error(err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => {
            AppError::Declined("Prompt cancelled".to_string())
        }
        err => AppError::Prompt(err.to_string()),
    }
}
