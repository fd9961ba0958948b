//! Settings file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::Settings;
use crate::error::{MeshlintError, Result};

/// Settings file names looked for in the working directory, in order.
pub const SETTINGS_FILE_NAMES: &[&str] = &[".meshlint.yml", ".meshlint.yaml"];

/// Find a settings file in `dir`.
pub fn discover_settings(dir: &Path) -> Option<PathBuf> {
    SETTINGS_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load a single settings file.
///
/// # Errors
///
/// Returns `SettingsParse` if the file can't be read or the YAML is invalid.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| MeshlintError::SettingsParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_settings(&content, path)
}

/// Parse YAML content into settings.
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    let settings: Settings = if content.trim().is_empty() {
        Settings::default()
    } else {
        serde_yaml::from_str(content).map_err(|e| MeshlintError::SettingsParse {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?
    };

    if settings.default_namespace.trim().is_empty() {
        return Err(MeshlintError::SettingsParse {
            path: source_path.to_path_buf(),
            message: "default_namespace must not be empty".to_string(),
        });
    }
    Ok(settings)
}

/// Load settings with optional path override.
///
/// If `config_override` is provided only that file is read. Otherwise a
/// settings file in `working_dir` is used when present, and the defaults
/// when not.
pub fn load_settings(working_dir: &Path, config_override: Option<&Path>) -> Result<Settings> {
    let path = match config_override {
        Some(path) => path.to_path_buf(),
        None => match discover_settings(working_dir) {
            Some(path) => path,
            None => {
                debug!("No settings file found, using defaults");
                return Ok(Settings::default());
            }
        },
    };
    debug!("Loading settings from {}", path.display());
    load_settings_file(&path)
}
