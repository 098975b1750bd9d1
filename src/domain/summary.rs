use serde_json::{Map, Value};

use super::{Settings, Setup};

/// Something the questionnaire shows the user before asking for approval.
#[derive(Debug, Clone, Copy)]
pub enum SettingsSummary<'a> {
    /// Settings the user may change.
    Customizable(&'a Settings),
    /// The fixed toolchain, shown as `role -> tool name`.
    Fixed(&'a Setup),
}

impl SettingsSummary<'_> {
    /// Pretty JSON with two-space indentation.
    pub fn render(&self) -> String {
        let value = match self {
            SettingsSummary::Customizable(settings) => {
                serde_json::to_value(settings).unwrap_or(Value::Null)
            }
            SettingsSummary::Fixed(setup) => {
                let map: Map<String, Value> = setup
                    .iter()
                    .map(|(role, tool)| (role.key().to_string(), Value::String(tool.name.clone())))
                    .collect();
                Value::Object(map)
            }
        };
        serde_json::to_string_pretty(&value).unwrap_or_default()
    }
}
