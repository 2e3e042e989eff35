//! Dataset methods - import, lookup, and cascading deletion

use super::error::{DashboardError, DashboardResult};
use super::Dashboard;
use crate::data::{parse_workbook_bytes, parse_workbook_file};
use crate::types::Dataset;
use std::path::Path;
use tracing::{info, warn};

impl Dashboard {
    /// Import the first sheet of a workbook file. Returns the new dataset id.
    ///
    /// On failure nothing is added.
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> DashboardResult<String> {
        let path = path.as_ref();
        let dataset = parse_workbook_file(path, &self.settings).inspect_err(|e| {
            warn!("Import of {} failed: {}", path.display(), e);
        })?;
        Ok(self.add_dataset(dataset))
    }

    /// Import a workbook already read into memory (e.g. an upload).
    pub fn import_bytes(&mut self, name: &str, bytes: Vec<u8>) -> DashboardResult<String> {
        let dataset = parse_workbook_bytes(name, bytes, &self.settings).inspect_err(|e| {
            warn!("Import of {} failed: {}", name, e);
        })?;
        Ok(self.add_dataset(dataset))
    }

    /// Register an already-parsed dataset
    pub fn add_dataset(&mut self, dataset: Dataset) -> String {
        info!(id = %dataset.id, name = %dataset.name, "Added dataset");
        self.datasets.insert(dataset)
    }

    pub fn dataset(&self, dataset_id: &str) -> Option<&Dataset> {
        self.datasets.get(dataset_id)
    }

    pub fn datasets(&self) -> &[Dataset] {
        self.datasets.as_slice()
    }

    /// Delete a dataset and every widget bound to it, on every board.
    ///
    /// Returns how many widgets were removed along with it.
    pub fn delete_dataset(&mut self, dataset_id: &str) -> DashboardResult<usize> {
        let dataset = self
            .datasets
            .remove(dataset_id)
            .ok_or_else(|| DashboardError::DatasetNotFound(dataset_id.to_string()))?;

        let removed: usize = self
            .boards
            .iter_mut()
            .map(|board| board.remove_widgets_for_dataset(dataset_id))
            .sum();

        info!(
            id = %dataset.id,
            name = %dataset.name,
            widgets_removed = removed,
            "Deleted dataset"
        );
        Ok(removed)
    }
}
