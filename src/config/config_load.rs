// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::config_types::*;
use crate::errors::LoadError;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub paths: PathConfig,
    pub window: WindowConfig,
    pub animation: AnimationConfig,
    pub layout: LayoutConfig,
    pub style: StyleConfig,
    pub scroll: ScrollConfig,
}

impl Config {
    pub fn load() -> Result<Self, LoadError> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_path(Path::new(CONFIG_FILE))
    }

    pub fn load_from_path(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(content)?)
    }

    fn load_from_exe_dir() -> Option<Self> {
        let config_path = exe_dir()?.join(CONFIG_FILE);

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => Some(config),
                Err(err) => {
                    debug!("Ignoring config next to executable: {}", err);
                    None
                }
            }
        } else {
            None
        }
    }

    pub fn resolve_stats_path(&self) -> PathBuf {
        let path = Path::new(&self.paths.stats_file);
        if path.is_absolute() {
            return path.to_path_buf();
        }

        // If path is relative, prefer the executable's directory, then the working directory
        match exe_dir().map(|dir| dir.join(path)) {
            Some(candidate) if candidate.exists() => candidate,
            _ => path.to_path_buf(),
        }
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
}
