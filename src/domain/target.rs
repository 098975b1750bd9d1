use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Runtime profile the generated package is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Node.js: plain `tsc` build with `@types/node` installed.
    #[default]
    Node,
    /// Browser: Vite library build with bundler module resolution.
    Web,
}

impl Target {
    /// All targets in prompt order.
    pub const ALL: [Target; 2] = [Target::Node, Target::Web];

    /// Lowercase identifier used on the command line and in summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Node => "node",
            Target::Web => "web",
        }
    }

    /// Parse a target from its identifier.
    pub fn from_name(name: &str) -> Option<Target> {
        match name.trim().to_lowercase().as_str() {
            "node" => Some(Target::Node),
            "web" | "browser" => Some(Target::Web),
            _ => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::from_name(s).ok_or_else(|| {
            AppError::config_error(format!("Invalid target '{s}': must be one of node, web"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_targets_case_insensitively() {
        assert_eq!(Target::from_name("NODE"), Some(Target::Node));
        assert_eq!(Target::from_name(" web "), Some(Target::Web));
        assert_eq!(Target::from_name("browser"), Some(Target::Web));
    }

    #[test]
    fn rejects_unknown_target() {
        let err = "deno".parse::<Target>().unwrap_err();
        assert!(err.to_string().contains("Invalid target 'deno'"));
    }

    #[test]
    fn identifiers_round_trip() {
        for target in Target::ALL {
            assert_eq!(Target::from_name(target.as_str()), Some(target));
        }
    }

    #[test]
    fn defaults_to_node() {
        assert_eq!(Target::default(), Target::Node);
    }
}
