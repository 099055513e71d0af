use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Rows shown in copy/paste previews.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_preview_rows() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preview_rows: default_preview_rows(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("batchsheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".batchsheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("batchsheet.conf")
    }

    /// Load the configuration from `override_path` or the standard
    /// location. A missing file yields the defaults.
    pub fn load(override_path: Option<&str>) -> AppResult<Self> {
        let path = override_path
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read '{}': {e}", path.display())))?;

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse '{}': {e}", path.display())))
    }

    /// Create the config file with default values, at `override_path` or
    /// the standard location. Returns the path written.
    pub fn init(override_path: Option<&str>) -> AppResult<PathBuf> {
        let path = override_path
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())
            .map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(&path, yaml)?;

        Ok(path)
    }
}
