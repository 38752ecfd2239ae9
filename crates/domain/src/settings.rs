use std::path::PathBuf;

use crate::SettingsError;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Name of the exercise catalog resource.
    pub resource: String,
    /// Directory containing file-based resources.
    pub directory: PathBuf,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resource: String::from("exercises.csv"),
            directory: PathBuf::from("resources"),
        }
    }
}
