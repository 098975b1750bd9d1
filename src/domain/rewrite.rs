//! Pure text and JSON rewriting.

use regex::{NoExpand, Regex};
use serde_json::{Map, Value};

use super::AppError;

/// How many matches a pattern replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    First,
    All,
}

/// A search pattern for text rewriting.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    scope: Scope,
}

impl Pattern {
    /// Compile a regular expression.
    pub fn regex(expr: &str, scope: Scope) -> Result<Self, AppError> {
        let regex = Regex::new(expr)
            .map_err(|e| AppError::config_error(format!("Invalid pattern '{expr}': {e}")))?;
        Ok(Self { regex, scope })
    }

    /// Match `text` verbatim.
    pub fn literal(text: &str, scope: Scope) -> Result<Self, AppError> {
        Self::regex(&regex::escape(text), scope)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    fn apply(&self, text: &str, replacement: &str) -> (String, bool) {
        if !self.regex.is_match(text) {
            return (text.to_string(), false);
        }
        let limit = match self.scope {
            Scope::First => 1,
            Scope::All => 0,
        };
        (self.regex.replacen(text, limit, NoExpand(replacement)).into_owned(), true)
    }
}

/// Result of a rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Patterns that matched nothing; the text was left unchanged for them.
    pub unmatched: Vec<String>,
}

impl RewriteReport {
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Apply each pattern with its replacement, in order.
///
/// Replacements are inserted literally. Fails with `LengthMismatch` when the
/// two slices differ in length.
pub fn replace_patterns(
    text: &str,
    patterns: &[Pattern],
    replacements: &[&str],
) -> Result<(String, RewriteReport), AppError> {
    if patterns.len() != replacements.len() {
        return Err(AppError::LengthMismatch {
            patterns: patterns.len(),
            replacements: replacements.len(),
        });
    }

    let mut report = RewriteReport::default();
    let mut current = text.to_string();
    for (pattern, replacement) in patterns.iter().zip(replacements) {
        let (next, matched) = pattern.apply(&current, replacement);
        if !matched {
            report.unmatched.push(pattern.as_str().to_string());
        }
        current = next;
    }
    Ok((current, report))
}

/// Overwrite the top-level keys of a JSON object with those in `patch`.
///
/// Keys absent from `patch` keep their value and position. Output is pretty
/// JSON with two-space indentation.
pub fn merge_json(content: &str, patch: &Map<String, Value>) -> Result<String, String> {
    let mut document: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let object = document
        .as_object_mut()
        .ok_or_else(|| "top-level value is not an object".to_string())?;
    for (key, value) in patch {
        object.insert(key.clone(), value.clone());
    }
    serde_json::to_string_pretty(&document).map_err(|e| e.to_string())
}
