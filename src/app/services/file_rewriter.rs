//! File-level rewriting over the `ProjectFiles` port.

use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::rewrite::{merge_json, replace_patterns};
use crate::domain::{AppError, Pattern, RewriteReport};
use crate::ports::ProjectFiles;

/// Rewrites whole files: read, transform, overwrite.
pub struct FileRewriter;

impl FileRewriter {
    /// Apply `patterns` to the text of `path` in order and overwrite the file.
    ///
    /// Patterns that match nothing are logged and listed in the report; the
    /// file is still written.
    pub fn rewrite_text<F: ProjectFiles>(
        files: &F,
        path: &str,
        patterns: &[Pattern],
        replacements: &[&str],
    ) -> Result<RewriteReport, AppError> {
        let content = files.read_file(path)?;
        let (rewritten, report) = replace_patterns(&content, patterns, replacements)?;
        for pattern in &report.unmatched {
            warn!(file = path, pattern = %pattern, "pattern matched nothing");
        }
        files.write_file(path, &rewritten)?;
        Ok(report)
    }

    /// Shallow-merge `patch` into the JSON object stored at `path`.
    pub fn rewrite_json<F: ProjectFiles>(
        files: &F,
        path: &str,
        patch: &Map<String, Value>,
    ) -> Result<(), AppError> {
        let content = files.read_file(path)?;
        let merged = merge_json(&content, patch)
            .map_err(|details| AppError::JsonParse { path: path.to_string(), details })?;
        files.write_file(path, &merged)
    }
}
