//! Read-time classification of hospital records.
//!
//! `type` and `emergency` are recomputed from `name` and `specialists` on
//! every read and never written back into a [`HospitalRecord`].

use std::borrow::Cow;

use crate::types::{EmergencyAvailability, FacilityType, HospitalRecord, SourceKind};

const GOVERNMENT_MARKERS: &[&str] = &["govt", "government", "uphc", "gh", "primary health center"];
const MULTISPECIALITY_MARKERS: &[&str] = &["multispeciality", "general hospital"];

/// Insurance label attached to every CMCHIS-sourced view.
pub const CMCHIS_INSURANCE: &str = "CMCHIS";

/// Heuristic facility type. A three-specialist clinic counts as Multispeciality.
pub fn classify(name: &str, specialists: &[String]) -> FacilityType {
    let name = name.to_lowercase();
    if GOVERNMENT_MARKERS.iter().any(|m| name.contains(m)) {
        FacilityType::Government
    } else if specialists.len() > 2 || MULTISPECIALITY_MARKERS.iter().any(|m| name.contains(m)) {
        FacilityType::Multispeciality
    } else {
        FacilityType::Specialty
    }
}

pub fn emergency_for(facility_type: FacilityType) -> EmergencyAvailability {
    match facility_type {
        FacilityType::Government | FacilityType::Multispeciality => EmergencyAvailability::Available24x7,
        FacilityType::Specialty | FacilityType::GovernmentEmpanelled => EmergencyAvailability::OnCallLimited,
    }
}

/// A stored record seen through its dataset: derived classification plus the
/// dataset-level overrides (CMCHIS facilities are free and accept CMCHIS only).
#[derive(Debug, Clone, Copy)]
pub struct DecoratedHospital<'a> {
    pub record: &'a HospitalRecord,
    pub facility_type: FacilityType,
    pub emergency: EmergencyAvailability,
    pub source: SourceKind,
}

impl<'a> DecoratedHospital<'a> {
    pub fn new(record: &'a HospitalRecord, source: SourceKind) -> Self {
        let heuristic = classify(&record.name, &record.specialists);
        let facility_type = match source {
            SourceKind::Nhis => heuristic,
            SourceKind::Cmchis => FacilityType::GovernmentEmpanelled,
        };
        Self { record, facility_type, emergency: emergency_for(heuristic), source }
    }

    pub fn fee(&self) -> u32 {
        match self.source {
            SourceKind::Nhis => self.record.fee,
            SourceKind::Cmchis => 0,
        }
    }

    pub fn insurance(&self) -> Cow<'a, [String]> {
        match self.source {
            SourceKind::Nhis => Cow::Borrowed(self.record.insurance.as_slice()),
            SourceKind::Cmchis => Cow::Owned(vec![CMCHIS_INSURANCE.to_string()]),
        }
    }

    pub fn rating(&self) -> f64 {
        self.record.rating.unwrap_or(0.0)
    }

    /// Owned copy with the dataset overrides applied.
    pub fn to_record(&self) -> HospitalRecord {
        HospitalRecord { fee: self.fee(), insurance: self.insurance().into_owned(), ..self.record.clone() }
    }
}
