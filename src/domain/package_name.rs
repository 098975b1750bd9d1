use std::fmt;

use super::AppError;

const MAX_LENGTH: usize = 214;

const BLACKLIST: [&str; 2] = ["node_modules", "favicon.ico"];

const SPECIAL_CHARACTERS: [char; 6] = ['~', '\'', '!', '(', ')', '*'];

/// Node.js core module names that npm refuses for new packages.
const CORE_MODULES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

/// Result of checking a name against npm naming rules.
///
/// Errors make a name unusable on npm at all; warnings only forbid it for
/// newly published packages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameValidation {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl NameValidation {
    pub fn valid_for_old_packages(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn valid_for_new_packages(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Errors followed by warnings.
    pub fn reasons(&self) -> Vec<String> {
        self.errors.iter().chain(self.warnings.iter()).cloned().collect()
    }
}

/// Check `name` against the npm package naming rules.
pub fn validate_package_name(name: &str) -> NameValidation {
    let mut result = NameValidation::default();

    if name.is_empty() {
        result.errors.push("name length must be greater than zero".to_string());
        return result;
    }
    if name.starts_with('.') {
        result.errors.push("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        result.errors.push("name cannot start with an underscore".to_string());
    }
    if name.trim() != name {
        result.errors.push("name cannot contain leading or trailing spaces".to_string());
    }
    let lower = name.to_lowercase();
    if BLACKLIST.contains(&lower.as_str()) {
        result.errors.push(format!("{name} is a blacklisted name"));
    }

    if CORE_MODULES.contains(&lower.as_str()) {
        result.warnings.push(format!("{name} is a core module name"));
    }
    if name.len() > MAX_LENGTH {
        result
            .warnings
            .push(format!("name can no longer contain more than {MAX_LENGTH} characters"));
    }
    if lower != name {
        result.warnings.push("name can no longer contain capital letters".to_string());
    }
    let last_segment = name.rsplit('/').next().unwrap_or(name);
    if last_segment.contains(SPECIAL_CHARACTERS) {
        result
            .warnings
            .push("name can no longer contain special characters (\"~'!()*\")".to_string());
    }

    if !is_url_friendly(name) {
        let scoped_ok = split_scope(name)
            .map(|(scope, package)| is_url_friendly(scope) && is_url_friendly(package))
            .unwrap_or(false);
        if !scoped_ok {
            result.errors.push("name can only contain URL-friendly characters".to_string());
        }
    }

    result
}

/// Split `@scope/package` into its parts.
fn split_scope(name: &str) -> Option<(&str, &str)> {
    let rest = name.strip_prefix('@')?;
    let (scope, package) = rest.split_once('/')?;
    if scope.is_empty() || package.is_empty() || package.contains('/') {
        return None;
    }
    Some((scope, package))
}

/// Characters `encodeURIComponent` leaves untouched.
fn is_url_friendly(value: &str) -> bool {
    value.chars().all(|c| {
        c.is_ascii_alphanumeric()
            || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
    })
}

/// A package name that npm accepts.
///
/// Guarantees:
/// - No npm naming errors (warnings are tolerated; the name-selection step
///   decides whether to enforce them)
/// - The derived folder name is a single, non-special path component
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub const DEFAULT: &'static str = "default-package";

    /// Validate and create a new instance.
    pub fn new(name: &str) -> Result<Self, AppError> {
        let validation = validate_package_name(name);
        if !validation.valid_for_old_packages() {
            return Err(AppError::InvalidPackageName {
                name: name.to_string(),
                reasons: validation.errors,
            });
        }
        let candidate = Self(name.to_string());
        if matches!(candidate.folder_name(), "" | "." | "..") {
            return Err(AppError::InvalidPackageName {
                name: name.to_string(),
                reasons: vec!["name does not map to a usable folder name".to_string()],
            });
        }
        Ok(candidate)
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name carries an `@scope/` prefix.
    pub fn is_scoped(&self) -> bool {
        self.0.starts_with('@')
    }

    /// Folder the package is generated into: the part after the scope, if any.
    pub fn folder_name(&self) -> &str {
        if self.is_scoped() {
            self.0.split('/').nth(1).unwrap_or_default()
        } else {
            &self.0
        }
    }
}

impl Default for PackageName {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl std::ops::Deref for PackageName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        self
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PackageName> for String {
    fn from(val: PackageName) -> Self {
        val.0
    }
}
