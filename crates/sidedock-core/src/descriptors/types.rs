use serde::{Deserialize, Serialize};

/// Static metadata describing a launchable application.
///
/// Serialized with the field names of the descriptor file format
/// (`name`, `iconPath`, `execPath`, `wmClass`). Missing fields default to
/// empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ApplicationDescriptor {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "iconPath", default)]
    pub icon_path: String,

    /// Shell command line; trusted input, interpreted by `sh -c`.
    #[serde(rename = "execPath", default)]
    pub exec_command: String,

    #[serde(rename = "wmClass", default)]
    pub window_class: String,
}

impl ApplicationDescriptor {
    /// Descriptors without a name cannot be matched or displayed.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
