use kq_core::{DEFAULT_FIELD_CAPACITY, DEFAULT_FORMAT};
use serde::{Deserialize, Serialize};

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

fn default_field_capacity() -> usize {
    DEFAULT_FIELD_CAPACITY
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FormatConfig {
    /// Format string describing one vocab line
    #[serde(default = "default_format")]
    pub format: String,
    /// Characters kept per field, excess is dropped
    #[serde(default = "default_field_capacity")]
    pub field_capacity: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            field_capacity: default_field_capacity(),
        }
    }
}
