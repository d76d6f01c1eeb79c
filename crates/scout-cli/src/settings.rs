//! User settings - persisted preferences for the terminal board.
//!
//! Settings are read from `settings.toml` in the platform config directory.
//! Command-line flags override them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub display: DisplaySettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding the roster and the language preference.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Maximum table width in columns.
    pub width: u16,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { width: 120 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Where exported workbooks go (default: current directory).
    pub output_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the default path, falling back to defaults when
    /// the file does not exist.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read settings {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parse settings {}", path.display()))
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("serialize settings")?;
        std::fs::write(path, content).with_context(|| format!("write settings {}", path.display()))
    }

    /// Resolve the data directory: flag, then settings, then platform default.
    pub fn data_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.storage.data_dir.clone())
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from(".mir4-scout"))
    }

    /// Resolve the export directory: flag, then settings, then `.`.
    pub fn export_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.export.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Default config file path.
    pub fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("settings.toml"))
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "Mir4Scout", "mir4-scout")
}
