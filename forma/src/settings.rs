use crate::error::SettingsResult;
use forma_schema::CompilerSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Process-wide Forma settings, usually read from `forma.toml`.
///
/// ```toml
/// [logging]
/// filter = "forma=debug"
///
/// [compiler]
/// strict_removal = true
/// strict_groups = false
///
/// [validation]
/// builtins = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub compiler: CompilerSettings,
    pub validation: ValidationSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `FORMA_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "forma=info".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Evaluate the built-in rules (`required`, `minLength`, ...).
    pub builtins: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self { builtins: true }
    }
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No settings file at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::read(path) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("{} ({:?}). Falling back to defaults.", e, path);
                Self::default()
            }
        }
    }

    /// Reads and parses `path`, reporting every failure.
    pub fn read(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> SettingsResult<Self> {
        Ok(toml::from_str(contents)?)
    }
}
