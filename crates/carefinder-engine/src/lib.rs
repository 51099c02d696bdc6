//! carefinder-engine
//!
//! Hospital recommendation over an immutable [`DatasetStore`]: insurance-aware
//! dataset selection, radius filtering, specialty tiers and emergency ordering.
//! Every operation is a pure read; failures degrade to empty results.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use carefinder_core::config::{Config, SearchSettings};
use carefinder_core::loader::FixtureLoader;
use carefinder_core::store::DatasetStore;

pub mod browse;
pub mod coverage;
pub mod query;
mod recommend;

pub use browse::IssueSearch;
pub use coverage::{CoverageDetails, CoverageResult};
pub use query::{PoolStats, RankedHospital, RecommendQuery, Recommendation};

pub struct Engine {
    store: Arc<DatasetStore>,
    settings: SearchSettings,
}

impl Engine {
    pub fn new(store: Arc<DatasetStore>, settings: SearchSettings) -> Self {
        Self { store, settings }
    }

    /// Engine with default limits (50 km, 50 results, 20 browse, 5 per policy).
    pub fn with_defaults(store: Arc<DatasetStore>) -> Self {
        Self::new(store, SearchSettings::default())
    }

    /// Load fixtures and limits from configuration; relative data paths
    /// resolve against `base`.
    pub fn from_config(config: &Config, base: &Path) -> Result<Self> {
        let settings = config.settings()?;
        let store = FixtureLoader::new(&settings.data, base)
            .load_store()
            .with_context(|| format!("loading fixtures from {}", settings.data.dir))?;
        if store.is_empty() {
            tracing::warn!("No hospital records loaded; every query will come back empty");
        }
        Ok(Self::new(Arc::new(store), settings.search))
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }
}
