use serde::Deserialize;
use url::Url;

use super::AppError;

pub const DEFAULT_TEMPLATE_URL: &str = "https://github.com/evgenylyozin/strap-package-template.git";
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org/";
pub const DEFAULT_NODE_DIST_INDEX_URL: &str = "https://nodejs.org/dist/index.json";
pub const DEFAULT_LOOKUP_HOST: &str = "registry.npmjs.org:443";
const DEFAULT_LOOKUP_PORT: u16 = 443;

/// Environment variable naming an optional config file.
pub const CONFIG_ENV_VAR: &str = "STRAP_CONFIG";

/// Tool configuration. Every field has a built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct StrapConfig {
    /// Repository cloned as the package template.
    pub template_url: Url,
    /// npm registry queried for name availability.
    pub registry_url: Url,
    /// Node.js release index used by the LTS check.
    pub node_dist_index_url: Url,
    /// `host:port` resolved by the online check.
    pub lookup_host: String,
}

impl Default for StrapConfig {
    fn default() -> Self {
        Self {
            template_url: parse_builtin(DEFAULT_TEMPLATE_URL),
            registry_url: parse_builtin(DEFAULT_REGISTRY_URL),
            node_dist_index_url: parse_builtin(DEFAULT_NODE_DIST_INDEX_URL),
            lookup_host: DEFAULT_LOOKUP_HOST.to_string(),
        }
    }
}

impl StrapConfig {
    /// Parse a TOML document; missing keys fall back to defaults.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let mut config: StrapConfig = toml::from_str(content)?;
        let host = config.lookup_host.trim();
        if host.is_empty() {
            return Err(AppError::config_error("lookup_host must not be empty"));
        }
        config.lookup_host = with_default_port(host);
        Ok(config)
    }
}

/// Append `:443` unless `host` already ends in a port.
fn with_default_port(host: &str) -> String {
    let has_port = host.rsplit_once(':').is_some_and(|(_, port)| port.parse::<u16>().is_ok());
    if has_port { host.to_string() } else { format!("{host}:{DEFAULT_LOOKUP_PORT}") }
}

fn parse_builtin(url: &str) -> Url {
    Url::parse(url).expect("built-in URL constants are valid")
}
