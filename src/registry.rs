//! In-memory registry of imported datasets.

use crate::types::Dataset;
use std::collections::HashSet;

/// Ordered list of datasets, in import order
#[derive(Clone, Debug, Default)]
pub struct DatasetRegistry {
    datasets: Vec<Dataset>,
}

impl DatasetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dataset and return its id
    pub fn insert(&mut self, dataset: Dataset) -> String {
        let id = dataset.id.clone();
        self.datasets.push(dataset);
        id
    }

    pub fn get(&self, id: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn remove(&mut self, id: &str) -> Option<Dataset> {
        let index = self.datasets.iter().position(|d| d.id == id)?;
        Some(self.datasets.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.iter()
    }

    pub fn as_slice(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Columns shared by every dataset
    pub fn common_columns(&self) -> Vec<String> {
        common_columns(self.datasets.iter())
    }

    /// Columns shared by the datasets with the given ids. Unknown ids are
    /// skipped.
    pub fn common_columns_of<'a, I>(&self, ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        common_columns(ids.into_iter().filter_map(|id| self.get(id)))
    }
}

/// Intersection of column names, in the first dataset's column order.
///
/// No datasets means no common columns.
pub fn common_columns<'a, I>(datasets: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Dataset>,
{
    let mut datasets = datasets.into_iter();
    let Some(first) = datasets.next() else {
        return Vec::new();
    };

    let mut common: Vec<String> = first.columns.clone();
    for dataset in datasets {
        let columns: HashSet<&str> = dataset.columns.iter().map(String::as_str).collect();
        common.retain(|c| columns.contains(c.as_str()));
        if common.is_empty() {
            break;
        }
    }
    common
}
