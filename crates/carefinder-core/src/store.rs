//! Immutable in-memory home for the three fixture collections.

use crate::classify::DecoratedHospital;
use crate::types::{CoveragePolicy, HospitalRecord, SourceKind};

/// General (NHIS) hospitals, CMCHIS-empanelled hospitals and the coverage
/// table. Built once and only ever read; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    general: Vec<HospitalRecord>,
    cmchis: Vec<HospitalRecord>,
    coverage: Vec<CoveragePolicy>,
}

impl DatasetStore {
    pub fn new(general: Vec<HospitalRecord>, cmchis: Vec<HospitalRecord>, coverage: Vec<CoveragePolicy>) -> Self {
        Self { general, cmchis, coverage }
    }

    /// Records of one dataset, decorated on the way out.
    pub fn hospitals(&self, source: SourceKind) -> impl Iterator<Item = DecoratedHospital<'_>> + '_ {
        let records = match source {
            SourceKind::Nhis => &self.general,
            SourceKind::Cmchis => &self.cmchis,
        };
        records.iter().map(move |r| DecoratedHospital::new(r, source))
    }

    pub fn len(&self, source: SourceKind) -> usize {
        match source {
            SourceKind::Nhis => self.general.len(),
            SourceKind::Cmchis => self.cmchis.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.general.is_empty() && self.cmchis.is_empty()
    }

    pub fn coverage(&self) -> &[CoveragePolicy] {
        &self.coverage
    }

    /// Case-insensitive policy id lookup; surrounding whitespace is ignored.
    pub fn find_policy(&self, policy_id: &str) -> Option<&CoveragePolicy> {
        let wanted = policy_id.trim();
        if wanted.is_empty() {
            return None;
        }
        self.coverage.iter().find(|p| p.id.trim().eq_ignore_ascii_case(wanted))
    }
}
