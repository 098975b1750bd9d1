use serde::Serialize;

use super::{PackageName, Target};

/// Customizable settings chosen by the user for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub name: PackageName,
    pub target: Target,
}

impl Settings {
    pub fn new(name: PackageName, target: Target) -> Self {
        Self { name, target }
    }

    /// Folder the package is generated into.
    pub fn folder_name(&self) -> &str {
        self.name.folder_name()
    }
}

impl Serialize for Settings {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Settings", 2)?;
        state.serialize_field("name", self.name.as_str())?;
        state.serialize_field("target", &self.target)?;
        state.end()
    }
}
