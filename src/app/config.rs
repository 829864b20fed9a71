//! Tool home resolution and settings loading.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, SETTINGS_FILE, Settings};

/// Environment variable overriding the tool home directory.
pub const HOME_ENV: &str = "MILI_RELEASE_HOME";

const HOME_DIR_NAME: &str = ".mili-release";

/// Directory holding `config.toml` and `credentials.json`.
///
/// `$MILI_RELEASE_HOME` wins over `~/.mili-release`.
pub fn tool_home() -> Result<PathBuf, AppError> {
    if let Ok(home) = env::var(HOME_ENV)
        && !home.trim().is_empty()
    {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir()
        .map(|home| home.join(HOME_DIR_NAME))
        .ok_or_else(|| AppError::config_error("Could not determine the user home directory"))
}

/// Load `config.toml` from `home`, falling back to defaults when absent.
pub fn load_settings(home: &Path) -> Result<Settings, AppError> {
    let path = home.join(SETTINGS_FILE);
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(&path)?;
    Settings::parse(&content)
}
