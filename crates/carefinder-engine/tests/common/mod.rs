#![allow(dead_code)]

use std::sync::Arc;

use carefinder_core::store::DatasetStore;
use carefinder_core::types::{CoverageAmount, CoveragePolicy, GeoPoint, HospitalRecord};
use carefinder_engine::Engine;

pub const CHENNAI: GeoPoint = GeoPoint::new(13.08, 80.27);
pub const MADURAI: GeoPoint = GeoPoint::new(9.9252, 78.1198);
pub const COIMBATORE: GeoPoint = GeoPoint::new(11.0168, 76.9558);

pub struct HospitalBuilder(HospitalRecord);

pub fn hospital(id: &str, name: &str) -> HospitalBuilder {
    HospitalBuilder(HospitalRecord {
        id: id.to_string(),
        name: name.to_string(),
        city: String::new(),
        district: String::new(),
        address: None,
        contact: None,
        location: None,
        specialists: vec!["General Medicine".to_string()],
        insurance: Vec::new(),
        fee: 300,
        rating: None,
    })
}

impl HospitalBuilder {
    pub fn at(mut self, p: GeoPoint) -> Self {
        self.0.location = Some(p);
        self
    }

    /// Roughly `km` kilometres north of `p`.
    pub fn north_of(self, p: GeoPoint, km: f64) -> Self {
        self.at(GeoPoint::new(p.lat + km / 111.2, p.lng))
    }

    pub fn specialists(mut self, s: &[&str]) -> Self {
        self.0.specialists = s.iter().map(|x| x.to_string()).collect();
        self
    }

    pub fn insurance(mut self, s: &[&str]) -> Self {
        self.0.insurance = s.iter().map(|x| x.to_string()).collect();
        self
    }

    pub fn rating(mut self, r: f64) -> Self {
        self.0.rating = Some(r);
        self
    }

    pub fn build(self) -> HospitalRecord {
        self.0
    }
}

pub fn policy(id: &str, name: &str) -> CoveragePolicy {
    CoveragePolicy {
        id: id.to_string(),
        policy_name: name.to_string(),
        coverage_amount: CoverageAmount::Text("500000".to_string()),
        policy_type: "Individual".to_string(),
    }
}

pub fn engine(general: Vec<HospitalRecord>, cmchis: Vec<HospitalRecord>, coverage: Vec<CoveragePolicy>) -> Engine {
    Engine::with_defaults(Arc::new(DatasetStore::new(general, cmchis, coverage)))
}
