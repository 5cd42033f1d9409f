use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

fn default_initial_chickens() -> i64 {
    50
}

fn default_days() -> u64 {
    365
}

/// Knobs of a single run. Everything else about the flock is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSettings {
    #[serde(default = "default_initial_chickens")]
    pub initial_chickens: i64,
    #[serde(default = "default_days")]
    pub days: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            initial_chickens: default_initial_chickens(),
            days: default_days(),
            seed: None,
        }
    }
}

impl RunSettings {
    /// Applies command line overrides on top of these settings.
    pub fn with_overrides(
        mut self,
        initial_chickens: Option<i64>,
        days: Option<u64>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(initial_chickens) = initial_chickens {
            self.initial_chickens = initial_chickens;
        }
        if let Some(days) = days {
            self.days = days;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub struct SettingsLoader {
    base_dir: PathBuf,
}

impl SettingsLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<RunSettings, SettingsError> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path).map_err(|source| SettingsError::Io {
            path: path.clone(),
            source,
        })?;
        let settings = if data.trim().is_empty() {
            RunSettings::default()
        } else {
            serde_yaml::from_str(&data).map_err(|source| SettingsError::Parse {
                path: path.clone(),
                source,
            })?
        };
        Ok(settings)
    }
}
