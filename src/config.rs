//! User configuration (`config.toml`).

use directories::ProjectDirs;
use gridcalc_core::OutputFormat;
use gridcalc_engine::engine::Rounding;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

/// Settings read from the config file. Command-line flags take precedence.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub format: Option<OutputFormat>,
    pub rounding: Option<Rounding>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(
        "Refusing to read {}: file too large ({size} bytes, max {max})",
        .path.display(),
        max = MAX_CONFIG_FILE_BYTES
    )]
    TooLarge { path: PathBuf, size: u64 },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load the config from `explicit`, or from the user config dir if none is given.
///
/// A missing user config is not an error; a missing explicit one is.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
        Some(path) => path.to_path_buf(),
        None => match user_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };
    read_config(&path)
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = std::fs::metadata(path).map_err(io_error)?.len();
    if size > MAX_CONFIG_FILE_BYTES {
        return Err(ConfigError::TooLarge {
            path: path.to_path_buf(),
            size,
        });
    }

    let content = std::fs::read_to_string(path).map_err(io_error)?;
    let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "gridcalc")?;
    Some(proj.config_dir().join("config.toml"))
}
