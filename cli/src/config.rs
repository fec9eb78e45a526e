// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use dayplan_core::{APP_NAME, Config as CoreConfig};

const DAYPLAN_CONFIG_ENV: &str = "DAYPLAN_CONFIG";
const DAYPLAN_DEV_ENV: &str = "DAYPLAN_DEV";

const DAYPLAN_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const DAYPLAN_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Locates and parses the configuration file.
///
/// The path is taken from the argument, then the `DAYPLAN_CONFIG` environment
/// variable, then `$XDG_CONFIG_HOME/dayplan/config.toml`. An explicitly given
/// file must exist; a missing default file yields the default configuration.
/// The returned core configuration is normalized.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(DAYPLAN_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({DAYPLAN_DEV_ENV} is set): config must be explicitly specified via --config or {DAYPLAN_CONFIG_ENV} environment variable",
            ).into());
        }

        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file found, using defaults");
            return normalized(CoreConfig::default());
        }
        config
    };

    let raw = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?;

    normalized(raw.core)
}

fn normalized(mut config: CoreConfig) -> Result<CoreConfig, Box<dyn Error>> {
    config.normalize()?;
    Ok(config)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(DAYPLAN_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if DAYPLAN_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if DAYPLAN_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            DAYPLAN_DEV_ENV,
            val,
            DAYPLAN_DEV_VALID_TRUE.join(", "),
            DAYPLAN_DEV_VALID_FALSE.join(", ")
        );
        None
    }
}
