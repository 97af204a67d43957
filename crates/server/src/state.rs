//! Shared application state.

use prosuite_core::{snapshot_from, Config, Dataset, MetricsSnapshot};
use prosuite_mazwi::Mazwi;

/// Handles shared by every request. Snapshots are recomputed per request
/// from the dataset so handlers never see a partially updated view.
pub struct AppState {
    pub config: Config,
    pub mazwi: Mazwi,
    pub dataset: Dataset,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_dataset(config, Dataset::builtin())
    }

    pub fn with_dataset(config: Config, dataset: Dataset) -> Self {
        let mazwi = Mazwi::from_config(&config.mazwi);
        Self::from_parts(config, mazwi, dataset)
    }

    pub fn from_parts(config: Config, mazwi: Mazwi, dataset: Dataset) -> Self {
        Self {
            config,
            mazwi,
            dataset,
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        snapshot_from(&self.dataset)
    }
}
