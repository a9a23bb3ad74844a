// src/models/data_model.rs
// the JSON-based stats data model

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::errors::LoadError;

/// One statistic shown by the counter grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    pub value: i64,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
}

impl StatItem {
    pub fn new(value: i64, suffix: &str, label: &str) -> Self {
        Self {
            value,
            suffix: suffix.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StatsFile {
    pub items: Vec<StatItem>,
}

impl StatsFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let stats = Self::parse(&content)?;
        info!("Loaded {} stat items from {}", stats.items.len(), path.display());
        Ok(stats)
    }

    pub fn parse(content: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(content)?)
    }
}
