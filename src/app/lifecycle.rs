//! Dashboard lifecycle - construction and settings.

use super::Dashboard;
use crate::data::FilterSet;
use crate::registry::DatasetRegistry;
use crate::settings::Settings;

impl Dashboard {
    /// Empty dashboard with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Empty dashboard with settings from the user's config directory
    pub fn load() -> Self {
        Self::with_settings(Settings::load())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            datasets: DatasetRegistry::new(),
            boards: Vec::new(),
            global_filters: FilterSet::new(),
            active_board: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
