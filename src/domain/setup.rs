use std::fmt;

use super::Target;

/// Packages that only the web target needs.
pub const BUNDLER_PACKAGES: [&str; 2] = ["vite", "vite-plugin-dts"];

/// Extra dev dependency for node targets.
pub const NODE_TYPES_PACKAGE: &str = "@types/node";

/// Role a tool plays in the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Language,
    TestRunner,
    Linter,
    Formatter,
    BuildTool,
    HooksTool,
}

impl Role {
    /// All roles in registry order.
    pub const ALL: [Role; 6] = [
        Role::Language,
        Role::TestRunner,
        Role::Linter,
        Role::Formatter,
        Role::BuildTool,
        Role::HooksTool,
    ];

    /// Key used in the rendered setup summary.
    pub fn key(&self) -> &'static str {
        match self {
            Role::Language => "language",
            Role::TestRunner => "testRunner",
            Role::Linter => "linter",
            Role::Formatter => "formatter",
            Role::BuildTool => "buildTool",
            Role::HooksTool => "hooksTool",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One installable tool and the packages that come with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub supplementary: Vec<String>,
    pub is_dev: bool,
}

impl ToolInfo {
    pub fn new(name: &str, supplementary: &[&str], is_dev: bool) -> Self {
        Self {
            name: name.to_string(),
            supplementary: supplementary.iter().map(|s| s.to_string()).collect(),
            is_dev,
        }
    }
}

/// Tool registry: one tool per role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    pub language: ToolInfo,
    pub test_runner: ToolInfo,
    pub linter: ToolInfo,
    pub formatter: ToolInfo,
    pub build_tool: ToolInfo,
    pub hooks_tool: ToolInfo,
}

impl Setup {
    /// The non-customizable toolchain every generated package gets.
    pub fn fixed() -> Self {
        Self {
            language: ToolInfo::new("typescript", &[], true),
            test_runner: ToolInfo::new("vitest", &[], true),
            linter: ToolInfo::new("eslint", &["@eslint/js", "typescript-eslint"], true),
            formatter: ToolInfo::new("prettier", &[], true),
            build_tool: ToolInfo::new("vite", &["vite-plugin-dts"], true),
            hooks_tool: ToolInfo::new("husky", &[], true),
        }
    }

    pub fn tool(&self, role: Role) -> &ToolInfo {
        match role {
            Role::Language => &self.language,
            Role::TestRunner => &self.test_runner,
            Role::Linter => &self.linter,
            Role::Formatter => &self.formatter,
            Role::BuildTool => &self.build_tool,
            Role::HooksTool => &self.hooks_tool,
        }
    }

    /// Tools paired with their roles, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &ToolInfo)> {
        Role::ALL.into_iter().map(move |role| (role, self.tool(role)))
    }
}

/// Install list for the tools whose `is_dev` flag equals `is_dev`.
///
/// Each matching tool contributes its name followed by its supplementary
/// packages, in registry order.
pub fn assemble_dependencies(setup: &Setup, is_dev: bool) -> Vec<String> {
    setup
        .iter()
        .filter(|(_, tool)| tool.is_dev == is_dev)
        .flat_map(|(_, tool)| std::iter::once(&tool.name).chain(tool.supplementary.iter()))
        .cloned()
        .collect()
}

/// Drop bundler packages from an install list when building for node.
pub fn exclude_bundler_for_target(dependencies: Vec<String>, target: Target) -> Vec<String> {
    match target {
        Target::Node => dependencies
            .into_iter()
            .filter(|dep| !BUNDLER_PACKAGES.contains(&dep.as_str()))
            .collect(),
        Target::Web => dependencies,
    }
}
