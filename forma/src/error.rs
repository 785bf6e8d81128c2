use std::io;
use thiserror::Error;

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors from reading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Read(#[from] io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}
