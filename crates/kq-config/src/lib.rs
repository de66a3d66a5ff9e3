use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::format::FormatConfig;
use self::ui::UiConfig;

pub mod format;
pub mod ui;

pub const ENV_FORMAT: &str = "KANJIQUEST_FORMAT";
pub const ENV_FIELD_CAPACITY: &str = "KANJIQUEST_FIELD_CAPACITY";
pub const ENV_TITLE: &str = "KANJIQUEST_TITLE";
pub const ENV_WIDTH: &str = "KANJIQUEST_WIDTH";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to open config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub format: FormatConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Defaults overridden by the process environment
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Read a JSON config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config file: {}", path.display());
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| env::var(key).ok());
    }

    /// Override fields from `KANJIQUEST_*` variables; unparsable numbers are ignored
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format.format = format;
        }

        if let Some(capacity) = lookup(ENV_FIELD_CAPACITY) {
            match capacity.parse() {
                Ok(capacity) => self.format.field_capacity = capacity,
                Err(_) => tracing::warn!("Ignoring {ENV_FIELD_CAPACITY}={capacity}: not a number"),
            }
        }

        if let Some(title) = lookup(ENV_TITLE) {
            self.ui.title = title;
        }

        if let Some(width) = lookup(ENV_WIDTH) {
            match width.parse() {
                Ok(width) => self.ui.width = width,
                Err(_) => tracing::warn!("Ignoring {ENV_WIDTH}={width}: not a number"),
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.format.field_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                key: "field_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.ui.width < 4 {
            return Err(ConfigError::InvalidValue {
                key: "width",
                reason: "must be at least 4 columns".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use kq_core::{DEFAULT_FIELD_CAPACITY, DEFAULT_FORMAT};
    use kq_types::Script;

    use super::*;

    #[test]
    fn defaults_match_core() {
        let config = Config::default();
        assert_eq!(config.format.format, DEFAULT_FORMAT);
        assert_eq!(config.format.field_capacity, DEFAULT_FIELD_CAPACITY);
        assert_eq!(config.ui.initial_script, Script::Logograph);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{ "format": {{ "format": "%h^%k^%r^%e" }}, "ui": {{ "initial_script": "english" }} }}"#
        )
        .expect("write");

        let config = Config::from_file(file.path()).expect("config parses");
        assert_eq!(config.format.format, "%h^%k^%r^%e");
        assert_eq!(config.format.field_capacity, DEFAULT_FIELD_CAPACITY);
        assert_eq!(config.ui.initial_script, Script::English);
        assert_eq!(config.ui.width, UiConfig::default().width);
    }

    #[test]
    fn invalid_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{ not json").expect("write");

        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::Json { .. })
        ));
    }

    #[test]
    fn environment_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_FORMAT, "%h,%k,%r,%e"),
            (ENV_FIELD_CAPACITY, "12"),
            (ENV_WIDTH, "wide"),
        ]);

        let mut config = Config::default();
        config.apply_env_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.format.format, "%h,%k,%r,%e");
        assert_eq!(config.format.field_capacity, 12);
        assert_eq!(config.ui.width, UiConfig::default().width);
        assert_eq!(config.ui.title, UiConfig::default().title);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let mut config = Config::default();
        config.format.field_capacity = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                key: "field_capacity",
                ..
            })
        ));
    }
}
