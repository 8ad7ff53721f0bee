use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml::map::Entry;
use tracing::{debug, warn};

use crate::event::EventClass;
use crate::key_repeat::{KeyRepeat, KeyRepeatMode};
use crate::manager::EventClassPolicy;

pub const CONFIG_FILE: &str = "input_config.toml";
pub const CONFIG_PATH_ENV: &str = "INPUT_MGMT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown event class {0:?}")]
    UnknownEventClass(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Left unset, backends fall back to [`KeyRepeatMode::Suppress`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_repeat_mode: Option<KeyRepeatMode>,
    /// Event class ids enabled at manager creation, all if unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_event_classes: Option<Vec<String>>,
    pub log_filter: String,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

impl Default for Config {
    fn default() -> Self {
        Self {
            key_repeat_mode: None,
            enabled_event_classes: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn with<R>(f: impl FnOnce(&Config) -> R) -> R {
        let config = CONFIG.get_or_init(Config::init);
        f(config)
    }

    fn init() -> Self {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        Self::load(&path)
    }

    /// Loads `path`, keeping the defaults (with a warning) if it can't be used.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Self::default();
        }
        match Self::from_path(path) {
            Ok(config) => {
                debug!(path = %path.display(), ?config, "configuration loaded");
                config
            }
            Err(err) => {
                warn!("Falling back to default config: {err}");
                Self::default()
            }
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses `content` and merges it over the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let overrides = content.parse::<toml::Value>()?;
        let mut merged = toml::Value::try_from(Self::default())
            .unwrap_or_else(|_| toml::Value::Table(toml::map::Map::new()));
        merge_value(&mut merged, overrides);
        let config = merged.try_into::<Config>()?;
        config.event_class_policy()?;
        Ok(config)
    }

    /// The enable policy for new device managers.
    pub fn event_class_policy(&self) -> Result<EventClassPolicy, ConfigError> {
        let Some(ids) = &self.enabled_event_classes else {
            return Ok(EventClassPolicy::EnableAll);
        };
        let classes = ids
            .iter()
            .map(|id| EventClass::from_id(id).ok_or_else(|| ConfigError::UnknownEventClass(id.clone())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EventClassPolicy::EnableOnly(classes))
    }

    /// Sets the configured key repeat mode, if any, on `repeat`.
    ///
    /// Returns `false` if nothing was configured or a mode was already set.
    pub fn apply_key_repeat_mode(&self, repeat: &KeyRepeat) -> bool {
        match self.key_repeat_mode {
            Some(mode) => repeat.set_mode(mode),
            None => false,
        }
    }
}

fn merge_value(base: &mut toml::Value, overrides: toml::Value) {
    match (base, overrides) {
        (toml::Value::Table(base_map), toml::Value::Table(override_map)) => {
            for (key, override_value) in override_map {
                match base_map.entry(key) {
                    Entry::Occupied(mut entry) => merge_value(entry.get_mut(), override_value),
                    Entry::Vacant(entry) => {
                        entry.insert(override_value);
                    }
                }
            }
        }
        (base_value, override_value) => {
            *base_value = override_value;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.event_class_policy().unwrap(), EventClassPolicy::EnableAll);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            key_repeat_mode = "add_release"
            enabled_event_classes = ["input::DeviceMgmt:DeviceMgmtEvent", "input::Key:KeyEvent"]
            "#
        )
        .unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.key_repeat_mode, Some(KeyRepeatMode::AddRelease));
        assert_eq!(config.log_filter, "info");
        assert_eq!(
            config.event_class_policy().unwrap(),
            EventClassPolicy::EnableOnly(vec![EventClass::DeviceMgmt, EventClass::Key])
        );
    }

    #[test]
    fn load_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "key_repeat_mode = \"sometimes\"").unwrap();
        assert_eq!(Config::load(file.path()), Config::default());

        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(&dir.path().join(CONFIG_FILE)), Config::default());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();
        assert_eq!(Config::load(file.path()).log_filter, "debug");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_path(dir.path().join(CONFIG_FILE));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            Config::from_toml_str("key_repeat_mode = \"sometimes\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_toml_str("enabled_event_classes = [\"input::Nope\"]"),
            Err(ConfigError::UnknownEventClass(id)) if id == "input::Nope"
        ));
        assert!(matches!(
            Config::from_toml_str("log_filter = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn key_repeat_mode_is_applied_once() {
        let config = Config::from_toml_str("key_repeat_mode = \"add_release_cancel\"").unwrap();
        let repeat = KeyRepeat::new();
        assert!(config.apply_key_repeat_mode(&repeat));
        assert!(!config.apply_key_repeat_mode(&repeat));
        assert_eq!(repeat.mode(), KeyRepeatMode::AddReleaseCancel);

        let repeat = KeyRepeat::new();
        assert!(!Config::default().apply_key_repeat_mode(&repeat));
        assert!(!repeat.is_mode_set());
    }
}
