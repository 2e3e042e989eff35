//! Dashboard settings.
//!
//! Settings are read from `settings.json` in the platform config directory.
//! Every field is optional; missing fields and a missing file fall back to the
//! defaults in [`crate::constants`].

use crate::constants::{
    DEFAULT_WIDGET_HEIGHT, DEFAULT_WIDGET_WIDTH, GRID_COLUMNS, MAX_SHEET_ROWS, MAX_WORKBOOK_SIZE_MB,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Limits and layout defaults for a dashboard
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Largest workbook accepted for import, in MB
    pub max_file_size_mb: u64,
    /// Largest number of data rows accepted from a sheet
    pub max_rows: usize,
    /// Columns in each board's layout grid
    pub grid_columns: u32,
    /// Width of a newly placed widget, in grid columns
    pub widget_width: u32,
    /// Height of a newly placed widget, in grid rows
    pub widget_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_file_size_mb: MAX_WORKBOOK_SIZE_MB,
            max_rows: MAX_SHEET_ROWS,
            grid_columns: GRID_COLUMNS,
            widget_width: DEFAULT_WIDGET_WIDTH,
            widget_height: DEFAULT_WIDGET_HEIGHT,
        }
    }
}

impl Settings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Using default settings: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        Ok(settings.sanitized())
    }

    /// Clamp values that would make the layout grid unusable
    fn sanitized(mut self) -> Self {
        self.grid_columns = self.grid_columns.max(1);
        self.widget_width = self.widget_width.clamp(1, self.grid_columns);
        self.widget_height = self.widget_height.max(1);
        self
    }
}

/// Path of the settings file, if the platform has a config directory
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sheetboard").join("settings.json"))
}
