use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::load_error::LoadError;
use crate::config::save_error::SaveError;

/*
Button texts of the dialog. A value, not a global - the selector takes one at
construction and Default is the process-wide default. Never affects navigation.
 */
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Labels {
    pub open_button: String,
    pub save_button: String,
    pub close_button: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            open_button: "Open".to_string(),
            save_button: "Save".to_string(),
            close_button: "Close".to_string(),
        }
    }
}

impl Labels {
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let b = std::fs::read(path)?;
        let s = std::str::from_utf8(&b)?;
        let item: Labels = ron::from_str(s)?;
        Ok(item)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), SaveError> {
        let item_s = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())?;
        std::fs::write(path, item_s)?;
        Ok(())
    }
}
