use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::config::DataSettings;
use crate::error::{Error, Result};
use crate::geo::district_centre;
use crate::store::DatasetStore;
use crate::types::{CoveragePolicy, HospitalRecord};

pub const UNKNOWN_HOSPITAL: &str = "Unknown Hospital";
pub const DEFAULT_SPECIALTY: &str = "General Medicine";

/// Reads the fixture files named by [`DataSettings`] into a [`DatasetStore`].
pub struct FixtureLoader {
    hospitals: PathBuf,
    cmchis: PathBuf,
    coverage: PathBuf,
}

impl FixtureLoader {
    pub fn new(settings: &DataSettings, base: &Path) -> Self {
        let (hospitals, cmchis, coverage) = settings.fixture_paths(base);
        Self { hospitals, cmchis, coverage }
    }

    pub fn load_store(&self) -> Result<DatasetStore> {
        let general = load_hospitals(&self.hospitals)?;
        let cmchis = load_hospitals(&self.cmchis)?;
        let coverage = load_coverage(&self.coverage)?;
        tracing::info!(
            general = general.len(),
            cmchis = cmchis.len(),
            policies = coverage.len(),
            "Loaded fixtures"
        );
        Ok(DatasetStore::new(general, cmchis, coverage))
    }
}

/// Load a hospital fixture and apply ingestion defaults to every record.
pub fn load_hospitals(path: &Path) -> Result<Vec<HospitalRecord>> {
    let mut records: Vec<HospitalRecord> = read_json(path)?;
    let mut defaulted = 0usize;
    for record in &mut records {
        if apply_ingestion_defaults(record) {
            defaulted += 1;
        }
    }
    if defaulted > 0 {
        tracing::warn!(path = %path.display(), defaulted, "Filled missing hospital fields");
    }
    Ok(records)
}

pub fn load_coverage(path: &Path) -> Result<Vec<CoveragePolicy>> {
    read_json(path)
}

/// Fill the fields every downstream stage relies on. Returns whether anything changed.
///
/// - blank `name` becomes "Unknown Hospital"
/// - blank specialist entries are dropped; an empty list becomes "General Medicine"
/// - a missing `location` falls back to the district (then city) centre if known
pub fn apply_ingestion_defaults(record: &mut HospitalRecord) -> bool {
    let mut changed = false;
    if record.name.trim().is_empty() {
        record.name = UNKNOWN_HOSPITAL.to_string();
        changed = true;
    }
    let before = record.specialists.len();
    record.specialists.retain(|s| !s.trim().is_empty());
    changed |= record.specialists.len() != before;
    for s in &mut record.specialists {
        if s.trim().len() != s.len() {
            *s = s.trim().to_string();
            changed = true;
        }
    }
    if record.specialists.is_empty() {
        record.specialists.push(DEFAULT_SPECIALTY.to_string());
        changed = true;
    }
    if record.location.is_none() {
        record.location = district_centre(&record.district).or_else(|| district_centre(&record.city));
        changed |= record.location.is_some();
    }
    changed
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::NotFound(path.display().to_string()));
    }
    let raw = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw).map_err(|source| Error::Fixture { path: path.to_path_buf(), source })
}
