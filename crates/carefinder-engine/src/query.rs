//! Request and response shapes of the engine.

use serde::Serialize;

use carefinder_core::classify::DecoratedHospital;
use carefinder_core::types::{EmergencyAvailability, FacilityType, GeoPoint, HospitalRecord, ProviderTag, SourceKind};

/// Specialty value that disables specialty filtering.
pub const GENERAL: &str = "General";

/// Input to [`crate::Engine::recommend_hospitals`].
///
/// `radius_km` falls back to the configured default (50 km) when unset.
/// `insurance_provider: None` means "no insurance filter".
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendQuery {
    pub specialty: String,
    pub location: Option<GeoPoint>,
    pub is_emergency: bool,
    pub insurance_provider: Option<ProviderTag>,
    pub radius_km: Option<f64>,
}

impl RecommendQuery {
    pub fn new(specialty: impl Into<String>) -> Self {
        Self {
            specialty: specialty.into(),
            location: None,
            is_emergency: false,
            insurance_provider: None,
            radius_km: None,
        }
    }

    pub fn near(mut self, location: Option<GeoPoint>) -> Self {
        self.location = location;
        self
    }

    pub fn emergency(mut self, is_emergency: bool) -> Self {
        self.is_emergency = is_emergency;
        self
    }

    pub fn insurance(mut self, provider: Option<ProviderTag>) -> Self {
        self.insurance_provider = provider;
        self
    }

    pub fn radius(mut self, radius_km: f64) -> Self {
        self.radius_km = Some(radius_km);
        self
    }
}

/// A query result: the stored record (with dataset overrides applied) plus
/// the fields derived for this query only.
///
/// `distance` is present only when the query carried a location.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedHospital {
    #[serde(flatten)]
    pub hospital: HospitalRecord,
    #[serde(rename = "type")]
    pub facility_type: FacilityType,
    pub emergency: EmergencyAvailability,
    pub source: SourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl RankedHospital {
    pub(crate) fn from_view(view: &DecoratedHospital<'_>, distance: Option<f64>) -> Self {
        Self {
            hospital: view.to_record(),
            facility_type: view.facility_type,
            emergency: view.emergency,
            source: view.source,
            distance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStats {
    /// Size of the selected dataset(s) before any filtering.
    pub total_in_pool: usize,
    /// Pool size after the radius filter.
    pub insurance_match_count: usize,
    /// Result count before truncation.
    pub symptom_match_count: usize,
    pub insurance_used: Option<ProviderTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub hospitals: Vec<RankedHospital>,
    pub stats: PoolStats,
}
