use std::io;

use thiserror::Error;

/// Library-wide error type for strap operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Rewrite patterns and replacements differ in length.
    #[error(
        "Rewrite patterns and replacements must have the same length (got {patterns} patterns and {replacements} replacements)"
    )]
    LengthMismatch { patterns: usize, replacements: usize },

    /// A JSON file could not be parsed or is not an object.
    #[error("Failed to parse JSON in {path}: {details}")]
    JsonParse { path: String, details: String },

    /// Package name does not satisfy npm naming rules.
    #[error("Invalid package name '{name}': {}", .reasons.join("; "))]
    InvalidPackageName { name: String, reasons: Vec<String> },

    /// Package name is already published on the registry.
    #[error("Package name '{0}' is already taken")]
    PackageNameTaken(String),

    /// Target folder already exists.
    #[error("Folder '{0}' already exists")]
    FolderExists(String),

    /// Required executable is not on PATH.
    #[error("'{0}' is not available on PATH")]
    ToolMissing(String),

    /// DNS lookup for the registry failed.
    #[error("You appear to be offline (could not resolve {host}): {details}")]
    Offline { host: String, details: String },

    /// Installed Node.js is not an LTS release line.
    #[error("Node {current} is not an LTS release. Please switch to an LTS version of Node")]
    NodeNotLts { current: String },

    /// The user answered "no" to a required confirmation.
    #[error("{0}")]
    Declined(String),

    /// An external command exited unsuccessfully.
    #[error("Command '{command}' failed: {details}")]
    CommandFailed { command: String, details: String },

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// HTTP request failed.
    #[error("Request to {url} failed: {details}")]
    Http { url: String, details: String },

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Invalid path (e.g. escaping the project root).
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A pipeline stage failed; `title` names the stage.
    #[error("{title}: {source}")]
    Stage {
        title: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Wrap an error with the title of the stage it occurred in.
    pub fn in_stage<S: Into<String>>(self, title: S) -> Self {
        AppError::Stage { title: title.into(), source: Box::new(self) }
    }

    /// Innermost error, skipping stage wrappers.
    pub fn root(&self) -> &AppError {
        match self {
            AppError::Stage { source, .. } => source.root(),
            other => other,
        }
    }
}
