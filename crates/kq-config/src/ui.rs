use kq_core::DEFAULT_TITLE;
use kq_types::Script;
use serde::{Deserialize, Serialize};

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_width() -> usize {
    40
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Frame width in terminal columns
    #[serde(default = "default_width")]
    pub width: usize,
    /// Script shown before any key is pressed
    #[serde(default)]
    pub initial_script: Script,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            initial_script: Script::default(),
        }
    }
}
