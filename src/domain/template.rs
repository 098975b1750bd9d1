//! Layout and literal markers of the package template.
//!
//! The adjustment steps only work against this known template: each marker
//! is a line that the template ships verbatim.

pub const MANIFEST_FILE: &str = "package.json";
pub const README_FILE: &str = "README.md";
pub const TSCONFIG_FILE: &str = "tsconfig.json";
pub const VITE_CONFIG_FILE: &str = "vite.config.js";
pub const PRE_COMMIT_HOOK: &str = ".husky/pre-commit";
pub const TEMPLATE_GIT_DIR: &str = ".git";

/// Placeholder the README uses for the package name.
pub const NAME_PLACEHOLDER: &str = "[PACKAGE NAME]";

pub const NODE_BUILD_SCRIPT_LINE: &str = r#""build": "tsc --p tsconfig.prod.json","#;
pub const WEB_BUILD_SCRIPT_LINE: &str = r#""build": "vite build","#;

pub const NODE_MODULE_RESOLUTION_LINE: &str = r#""moduleResolution": "nodenext","#;
pub const WEB_MODULE_RESOLUTION_LINE: &str = r#""moduleResolution": "bundler","#;

pub const NODE_MODULE_LINE: &str = r#""module": "NodeNext","#;
pub const WEB_MODULE_LINE: &str = r#""module": "ESNext","#;

/// Commands the generated pre-commit hook runs, in order.
pub const PRE_COMMIT_SCRIPT: &str = "npm run prettify
npm run stage-updated
npm run typecheck
npm run lint
npm run test
npm run build";
