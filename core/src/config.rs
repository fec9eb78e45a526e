// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

/// The name of the application.
pub const APP_NAME: &str = "dayplan";

/// The fixed name of the task file inside the data directory.
pub const STORE_FILE_NAME: &str = "todos.json";

/// Core configuration, read from the `[core]` table of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the task file.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Normalize the configuration.
    ///
    /// Expands home and config directory prefixes in `data_dir`, and fills it
    /// with the user state directory when unset.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        match &self.data_dir {
            Some(a) => {
                self.data_dir = Some(
                    expand_path(a).map_err(|e| format!("Failed to expand data directory: {e}"))?,
                )
            }

            None => match get_state_dir() {
                Ok(a) => self.data_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!("Failed to get state directory: {e}"),
            },
        };

        Ok(())
    }

    /// Path of the task file.
    ///
    /// Falls back to the current directory when no data directory is known.
    pub fn store_path(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.join(STORE_FILE_NAME),
            None => PathBuf::from(STORE_FILE_NAME),
        }
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(not(unix))]
    let state_dir = dirs::data_dir();
    state_dir.ok_or_else(|| "User-specific state directory not found".into())
}
